use super::ops::impl_vector;
use super::Scalar;

/// A displacement in 2D space.
///
/// Arithmetic between vectors of different scalar types promotes through
/// [`Promote`](super::Promote): `Vector2<i32> + Vector2<f64>` is a
/// `Vector2<f64>`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vector2<S> {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Unit vector along the x axis.
    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(S::one(), S::zero())
    }

    /// Unit vector along the y axis.
    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(S::zero(), S::one())
    }
}

impl_vector!(Vector2, 2, [x: 0, y: 1]);

impl<S: Scalar> From<(S, S)> for Vector2<S> {
    fn from((x, y): (S, S)) -> Self {
        Self::new(x, y)
    }
}

impl<S: Scalar> From<Vector2<S>> for nalgebra::Vector2<S> {
    fn from(v: Vector2<S>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl<S: Scalar> From<nalgebra::Vector2<S>> for Vector2<S> {
    fn from(v: nalgebra::Vector2<S>) -> Self {
        Self::new(v.x, v.y)
    }
}

pub type Vec2i = Vector2<i32>;
pub type Vec2u = Vector2<u32>;
pub type Vec2l = Vector2<i64>;
pub type Vec2ul = Vector2<u64>;
pub type Vec2f = Vector2<f32>;
pub type Vec2d = Vector2<f64>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_zero() {
        let v = Vec2i::default();
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 0);
    }

    #[test]
    fn narrowing_cast_truncates() {
        let v = Vec2d::new(1.1, 2.9).cast::<i32>();
        assert_eq!(v, Vec2i::new(1, 2));
        let v = Vec2d::new(-1.9, -0.2).cast::<i32>();
        assert_eq!(v, Vec2i::new(-1, 0));
    }

    #[test]
    fn widening_cast_is_exact() {
        let v = Vec2i::new(5, 10).cast::<f64>();
        assert_eq!(v.x, 5.0);
        assert_eq!(v.y, 10.0);
    }

    #[test]
    fn assign_from_converts() {
        let mut v = Vec2i::default();
        v.assign_from(&Vec2d::new(1.1, 2.2));
        assert_eq!(v, Vec2i::new(1, 2));

        let mut w = Vec2d::default();
        w.assign_from(&Vec2i::new(5, 10));
        assert_eq!(w, Vec2d::new(5.0, 10.0));
    }

    #[test]
    fn elementwise_arithmetic() {
        assert_eq!(Vec2i::new(1, 2) + Vec2i::new(2, 1), Vec2i::new(3, 3));
        assert_eq!(Vec2i::new(4, 2) / Vec2i::new(2, 2), Vec2i::new(2, 1));
        assert_eq!(Vec2i::new(3, 4) * Vec2i::new(2, -1), Vec2i::new(6, -4));
        assert_eq!(Vec2i::new(3, 4) - Vec2i::new(5, 1), Vec2i::new(-2, 3));
    }

    #[test]
    fn mixed_types_promote() {
        let v: Vec2d = Vec2i::new(1, 2) + Vec2d::new(0.5, 0.25);
        assert_eq!(v, Vec2d::new(1.5, 2.25));
        let w: Vec2f = Vec2f::new(1.0, 2.0) * 2_i32;
        assert_eq!(w, Vec2f::new(2.0, 4.0));
    }

    #[test]
    fn scalar_broadcast_commutes() {
        let v = Vec2i::new(3, -2);
        assert_eq!(v * 3_i32, 3_i32 * v);
        assert_eq!(v / 2_i32, Vec2i::new(1, -1));
    }

    #[test]
    fn compound_assignment_keeps_lhs_type() {
        let mut v = Vec2i::new(1, 1);
        v += Vec2d::new(0.6, 1.7);
        assert_eq!(v, Vec2i::new(1, 2));
        v *= 3_i32;
        assert_eq!(v, Vec2i::new(3, 6));
        v /= Vec2i::new(3, 2);
        assert_eq!(v, Vec2i::new(1, 3));
        v -= Vec2i::new(1, 1);
        assert_eq!(v, Vec2i::new(0, 2));
    }

    #[test]
    fn comparison_is_conjunctive() {
        assert!(Vec2i::new(1, 1) < Vec2i::new(2, 2));
        assert!(!(Vec2i::new(1, 1) < Vec2i::new(2, 0)));
        assert!(!(Vec2i::new(1, 1) > Vec2i::new(2, 0)));
        assert!(Vec2i::new(1, 2) <= Vec2i::new(1, 3));
        assert!(Vec2i::new(1, 1) != Vec2i::new(1, 2));
        assert_eq!(Vec2i::new(1, 1).partial_cmp(&Vec2i::new(2, 0)), None);
    }

    #[test]
    fn equality_across_types() {
        assert_eq!(Vec2i::new(1, 2), Vec2d::new(1.0, 2.0));
        assert_ne!(Vec2i::new(1, 2), Vec2d::new(1.0, 2.5));
    }

    #[test]
    fn negation_is_an_involution() {
        let v = Vec2i::new(3, -7);
        assert_eq!(-v, Vec2i::new(-3, 7));
        assert_eq!(-(-v), v);
    }

    #[test]
    fn length_precision() {
        let l: f32 = Vec2f::new(3.0, 4.0).length();
        assert!((l - 5.0).abs() < f32::EPSILON);
        let l: f64 = Vec2i::new(3, 4).length();
        assert!((l - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn length_matches_dot() {
        let v = Vec2d::new(1.5, -2.5);
        assert_relative_eq!(v.length(), v.dot(v).sqrt());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2i::new(3, 4).normalize();
        assert_relative_eq!(n.length(), 1.0);
        assert_relative_eq!(n, Vec2d::new(0.6, 0.8));
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec2d::zeros().normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn reflect_twice_is_identity() {
        let v = Vec2d::new(1.0, -1.0);
        let n = Vec2d::unit_y();
        let r = v.reflect(n);
        assert_relative_eq!(r, Vec2d::new(1.0, 1.0));
        assert_relative_eq!(r.reflect(n), v);
    }

    #[test]
    fn index_access() {
        let mut v = Vec2i::new(7, 8);
        assert_eq!(v[0], 7);
        v[1] = 9;
        assert_eq!(v.y, 9);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_end_panics() {
        let v = Vec2i::new(7, 8);
        let _ = v[2];
    }

    #[test]
    fn slice_conversion_checks_length() {
        let v = Vec2i::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v, Vec2i::new(1, 2));
        assert!(Vec2i::try_from(&[1, 2, 3][..]).is_err());
    }

    #[test]
    fn try_cast_rejects_negative_to_unsigned() {
        assert!(Vec2i::new(1, -1).try_cast::<u32>().is_err());
        assert_eq!(Vec2i::new(1, 2).try_cast::<u32>().unwrap(), Vec2u::new(1, 2));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec2i::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(format!("{:.1}", Vec2d::new(0.26, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn nalgebra_roundtrip() {
        let v = Vec2d::new(1.0, 2.0);
        let n: nalgebra::Vector2<f64> = v.into();
        assert_eq!(n, nalgebra::Vector2::new(1.0, 2.0));
        assert_eq!(Vec2d::from(n), v);
    }
}
