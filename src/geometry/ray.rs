use num_traits::AsPrimitive;

use crate::geometry::Point3;
use crate::math::{Promote, Scalar, Vector3};

/// A half-infinite line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<S> {
    pub origin: Point3<S>,
    pub direction: Vector3<S>,
}

impl<S: Promote> PartialEq for Ray<S> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

impl<S: Scalar> Ray<S> {
    /// Creates a ray from its origin and direction.
    #[must_use]
    pub const fn new(origin: Point3<S>, direction: Vector3<S>) -> Self {
        Self { origin, direction }
    }

    /// Converts origin and direction to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Ray<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Ray::new(self.origin.cast(), self.direction.cast())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Ray<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// A ray from the origin along the z axis.
impl<S: Scalar> Default for Ray<S> {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::unit_z())
    }
}

pub type Rayf = Ray<f32>;
pub type Rayd = Ray<f64>;
