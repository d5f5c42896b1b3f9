use num_traits::AsPrimitive;

use crate::geometry::Point2;
use crate::math::Scalar;

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<S> {
    pub center: Point2<S>,
    pub radius: S,
}

impl<S: Scalar> Circle2<S> {
    /// Creates a circle from its center and radius.
    #[must_use]
    pub const fn new(center: Point2<S>, radius: S) -> Self {
        Self { center, radius }
    }

    /// Converts center and radius to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Circle2<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Circle2::new(self.center.cast(), self.radius.as_())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Circle2<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// The unit circle around the origin.
impl<S: Scalar> Default for Circle2<S> {
    fn default() -> Self {
        Self::new(Point2::origin(), S::one())
    }
}

pub type Circle2i = Circle2<i32>;
pub type Circle2u = Circle2<u32>;
pub type Circle2l = Circle2<i64>;
pub type Circle2ul = Circle2<u64>;
pub type Circle2f = Circle2<f32>;
pub type Circle2d = Circle2<f64>;
