use num_traits::AsPrimitive;

use crate::geometry::{Point2, Point3};
use crate::math::Scalar;

/// A 2D line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line2<S> {
    pub p1: Point2<S>,
    pub p2: Point2<S>,
}

impl<S: Scalar> Line2<S> {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub const fn new(p1: Point2<S>, p2: Point2<S>) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x1: S, y1: S, x2: S, y2: S) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Converts both endpoints to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Line2<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Line2::new(self.p1.cast(), self.p2.cast())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Line2<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// A 3D line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3<S> {
    pub p1: Point3<S>,
    pub p2: Point3<S>,
}

impl<S: Scalar> Line3<S> {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub const fn new(p1: Point3<S>, p2: Point3<S>) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x1: S, y1: S, z1: S, x2: S, y2: S, z2: S) -> Self {
        Self::new(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2))
    }

    /// Converts both endpoints to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Line3<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Line3::new(self.p1.cast(), self.p2.cast())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Line3<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

impl<S: Scalar> Default for Line2<S> {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }
}

impl<S: Scalar> Default for Line3<S> {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin())
    }
}

pub type Line2i = Line2<i32>;
pub type Line2u = Line2<u32>;
pub type Line2l = Line2<i64>;
pub type Line2ul = Line2<u64>;
pub type Line2f = Line2<f32>;
pub type Line2d = Line2<f64>;
pub type Line3i = Line3<i32>;
pub type Line3u = Line3<u32>;
pub type Line3l = Line3<i64>;
pub type Line3ul = Line3<u64>;
pub type Line3f = Line3<f32>;
pub type Line3d = Line3<f64>;
