use num_traits::AsPrimitive;

use crate::geometry::{Dimensions2, Point2, Point3};
use crate::math::{Promote, Scalar, Vector3};

/// An axis-aligned rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle2<S> {
    pub origin: Point2<S>,
    pub dim: Dimensions2<S>,
}

impl<S: Scalar> Rectangle2<S> {
    /// Creates a rectangle from its origin corner and extents.
    #[must_use]
    pub const fn new(origin: Point2<S>, dim: Dimensions2<S>) -> Self {
        Self { origin, dim }
    }

    /// Creates a rectangle from raw coordinates and extents.
    #[must_use]
    pub const fn from_xywh(x: S, y: S, width: S, height: S) -> Self {
        Self::new(Point2::new(x, y), Dimensions2::new(width, height))
    }

    /// Converts origin and extents to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Rectangle2<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Rectangle2::new(self.origin.cast(), self.dim.cast())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Rectangle2<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// The unit square at the origin.
impl<S: Scalar> Default for Rectangle2<S> {
    fn default() -> Self {
        Self::from_xywh(S::zero(), S::zero(), S::one(), S::one())
    }
}

/// A rectangle embedded in 3D space, oriented by its normal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle3<S> {
    pub origin: Point3<S>,
    pub dim: Dimensions2<S>,
    pub normal: Vector3<S>,
}

impl<S: Promote> PartialEq for Rectangle3<S> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.dim == other.dim
            && self.normal == other.normal
    }
}

impl<S: Scalar> Rectangle3<S> {
    /// Creates a rectangle from its origin corner, extents and normal.
    #[must_use]
    pub const fn new(origin: Point3<S>, dim: Dimensions2<S>, normal: Vector3<S>) -> Self {
        Self {
            origin,
            dim,
            normal,
        }
    }

    /// Converts every field to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Rectangle3<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Rectangle3::new(self.origin.cast(), self.dim.cast(), self.normal.cast())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Rectangle3<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// The unit square at the origin, lying flat and facing up the y axis.
impl<S: Scalar> Default for Rectangle3<S> {
    fn default() -> Self {
        Self::new(
            Point3::origin(),
            Dimensions2::new(S::one(), S::one()),
            Vector3::unit_y(),
        )
    }
}

pub type Rectangle2i = Rectangle2<i32>;
pub type Rectangle2u = Rectangle2<u32>;
pub type Rectangle2l = Rectangle2<i64>;
pub type Rectangle2ul = Rectangle2<u64>;
pub type Rectangle2f = Rectangle2<f32>;
pub type Rectangle2d = Rectangle2<f64>;
pub type Rectangle3f = Rectangle3<f32>;
pub type Rectangle3d = Rectangle3<f64>;
