use num_traits::AsPrimitive;

use crate::geometry::Point3;
use crate::math::Scalar;

/// A sphere in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<S> {
    pub center: Point3<S>,
    pub radius: S,
}

impl<S: Scalar> Sphere<S> {
    /// Creates a sphere from its center and radius.
    #[must_use]
    pub const fn new(center: Point3<S>, radius: S) -> Self {
        Self { center, radius }
    }

    /// Converts center and radius to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Sphere<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Sphere::new(self.center.cast(), self.radius.as_())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Sphere<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// The unit sphere around the origin.
impl<S: Scalar> Default for Sphere<S> {
    fn default() -> Self {
        Self::new(Point3::origin(), S::one())
    }
}

pub type Sphere3i = Sphere<i32>;
pub type Sphere3u = Sphere<u32>;
pub type Sphere3l = Sphere<i64>;
pub type Sphere3ul = Sphere<u64>;
pub type Sphere3f = Sphere<f32>;
pub type Sphere3d = Sphere<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unit_sphere() {
        assert_eq!(Sphere3i::default(), Sphere3i::new(Point3::new(0, 0, 0), 1));
    }

    #[test]
    fn converting_assignment() {
        let mut s = Sphere3f::default();
        s.assign_from(&Sphere3u::new(Point3::new(1, 2, 3), 4));
        assert_eq!(s, Sphere3f::new(Point3::new(1.0, 2.0, 3.0), 4.0));
    }
}
