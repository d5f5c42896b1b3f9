use num_traits::Float;
use tracing::trace;

use super::ops::impl_vector;
use super::{Promote, Promoted, Scalar};

/// A displacement in 3D space.
///
/// Besides the shared vector operators, `Vector3` carries the cross product
/// and refraction.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vector3<S> {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    /// Unit vector along the x axis.
    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(S::one(), S::zero(), S::zero())
    }

    /// Unit vector along the y axis.
    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(S::zero(), S::one(), S::zero())
    }

    /// Unit vector along the z axis.
    #[must_use]
    pub fn unit_z() -> Self {
        Self::new(S::zero(), S::zero(), S::one())
    }

    /// Computes the cross product `self x rhs`.
    #[must_use]
    pub fn cross<R>(self, rhs: Vector3<R>) -> Vector3<Promoted<S, R>>
    where
        R: Scalar,
        S: Promote<R>,
    {
        let l = self.map(|c| c.promote_lhs());
        let r = rhs.map(<S as Promote<R>>::promote_rhs);
        Vector3::new(
            l.y * r.z - l.z * r.y,
            l.z * r.x - l.x * r.z,
            l.x * r.y - l.y * r.x,
        )
    }

    /// Refracts `self` through a surface with unit `normal` and ratio of
    /// indices of refraction `eta`.
    ///
    /// With `d = dot(normal, self)` and `k = 1 - eta^2 * (1 - d^2)`, the
    /// result is `eta * self - (eta * d + sqrt(k)) * normal`. When `k < 0`
    /// the ray is totally internally reflected and the zero vector is
    /// returned.
    #[must_use]
    pub fn refract<N, E>(self, normal: Vector3<N>, eta: E) -> Vector3<Promoted<Promoted<S, N>, E>>
    where
        N: Scalar,
        E: Scalar + Float,
        S: Promote<N>,
        Promoted<S, N>: Promote<E>,
        Promoted<Promoted<S, N>, E>: Float,
    {
        let lift = |c: Promoted<S, N>| <Promoted<S, N> as Promote<E>>::promote_lhs(c);
        let incident = self.map(|c| lift(c.promote_lhs()));
        let normal = normal.map(|c| lift(<S as Promote<N>>::promote_rhs(c)));
        let eta = <Promoted<S, N> as Promote<E>>::promote_rhs(eta);
        refract_in(incident, normal, eta)
    }
}

fn refract_in<T: Scalar + Float>(incident: Vector3<T>, normal: Vector3<T>, eta: T) -> Vector3<T> {
    let d = normal.x * incident.x + normal.y * incident.y + normal.z * incident.z;
    let k = T::one() - eta * eta * (T::one() - d * d);
    if k < T::zero() {
        trace!(?eta, ?k, "total internal reflection");
        return Vector3::zeros();
    }
    let scale = eta * d + k.sqrt();
    incident.zip_map(normal, |i, n| eta * i - scale * n)
}

impl_vector!(Vector3, 3, [x: 0, y: 1, z: 2]);

impl<S: Scalar> From<(S, S, S)> for Vector3<S> {
    fn from((x, y, z): (S, S, S)) -> Self {
        Self::new(x, y, z)
    }
}

impl<S: Scalar> From<Vector3<S>> for nalgebra::Vector3<S> {
    fn from(v: Vector3<S>) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl<S: Scalar> From<nalgebra::Vector3<S>> for Vector3<S> {
    fn from(v: nalgebra::Vector3<S>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

pub type Vec3i = Vector3<i32>;
pub type Vec3u = Vector3<u32>;
pub type Vec3l = Vector3<i64>;
pub type Vec3ul = Vector3<u64>;
pub type Vec3f = Vector3<f32>;
pub type Vec3d = Vector3<f64>;
