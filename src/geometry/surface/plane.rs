use num_traits::AsPrimitive;

use crate::math::{Promote, Scalar, Vector3};

/// An infinite plane: the points `p` with `dot(normal, p) == offset`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<S> {
    pub normal: Vector3<S>,
    /// How far along the normal the plane sits from the origin.
    pub offset: S,
}

impl<S: Promote> PartialEq for Plane<S> {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.offset == other.offset
    }
}

impl<S: Scalar> Plane<S> {
    /// Creates a plane from its normal and offset.
    #[must_use]
    pub const fn new(normal: Vector3<S>, offset: S) -> Self {
        Self { normal, offset }
    }

    /// Converts normal and offset to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Plane<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Plane::new(self.normal.cast(), self.offset.as_())
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Plane<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

/// The plane through the origin facing up the y axis.
impl<S: Scalar> Default for Plane<S> {
    fn default() -> Self {
        Self::new(Vector3::unit_y(), S::zero())
    }
}

pub type Planef = Plane<f32>;
pub type Planed = Plane<f64>;
