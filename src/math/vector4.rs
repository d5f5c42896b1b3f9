use super::ops::impl_vector;
use super::Scalar;

/// A four-component vector, typically homogeneous coordinates or RGBA.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vector4<S> {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }
}

impl_vector!(Vector4, 4, [x: 0, y: 1, z: 2, w: 3]);

impl<S: Scalar> From<(S, S, S, S)> for Vector4<S> {
    fn from((x, y, z, w): (S, S, S, S)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<S: Scalar> From<Vector4<S>> for nalgebra::Vector4<S> {
    fn from(v: Vector4<S>) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl<S: Scalar> From<nalgebra::Vector4<S>> for Vector4<S> {
    fn from(v: nalgebra::Vector4<S>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

pub type Vec4i = Vector4<i32>;
pub type Vec4u = Vector4<u32>;
pub type Vec4l = Vector4<i64>;
pub type Vec4ul = Vector4<u64>;
pub type Vec4f = Vector4<f32>;
pub type Vec4d = Vector4<f64>;
