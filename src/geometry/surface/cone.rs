use num_traits::AsPrimitive;

use crate::geometry::Point3;
use crate::math::{Promote, Scalar, Vector3};

/// A finite cone.
///
/// The cone opens from `apex` along `axis` for `height` units; `angle` is
/// the half-angle between the axis and the surface, in radians.
///
/// There is no `Default`: a cone has no natural zero value.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cone<S> {
    pub apex: Point3<S>,
    pub axis: Vector3<S>,
    pub height: S,
    pub angle: S,
}

impl<S: Promote> PartialEq for Cone<S> {
    fn eq(&self, other: &Self) -> bool {
        self.apex == other.apex
            && self.axis == other.axis
            && self.height == other.height
            && self.angle == other.angle
    }
}

impl<S: Scalar> Cone<S> {
    /// Creates a cone.
    #[must_use]
    pub const fn new(apex: Point3<S>, axis: Vector3<S>, height: S, angle: S) -> Self {
        Self {
            apex,
            axis,
            height,
            angle,
        }
    }

    /// Converts every field to another scalar type.
    #[must_use]
    pub fn cast<T>(self) -> Cone<T>
    where
        T: Scalar,
        S: AsPrimitive<T>,
    {
        Cone::new(
            self.apex.cast(),
            self.axis.cast(),
            self.height.as_(),
            self.angle.as_(),
        )
    }

    /// Overwrites `self` with a converted copy of `source`.
    pub fn assign_from<O>(&mut self, source: &Cone<O>)
    where
        O: Scalar + AsPrimitive<S>,
    {
        *self = source.cast();
    }
}

pub type Conef = Cone<f32>;
pub type Coned = Cone<f64>;
