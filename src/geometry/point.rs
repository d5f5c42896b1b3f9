use num_traits::{AsPrimitive, NumCast, ToPrimitive};

use crate::error::Result;
use crate::math::{checked_cast, Scalar, Vector2, Vector3};

/// A position in 2D space.
///
/// Same shape as [`Vector2`], but a location rather than a displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<S> {
    pub x: S,
    pub y: S,
}

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

macro_rules! impl_point {
    ($Point:ident, $Vector:ident, $n:literal, [$($field:ident),+]) => {
        impl<S: Scalar> $Point<S> {
            /// Creates a new point from its coordinates.
            #[must_use]
            pub const fn new($($field: S),+) -> Self {
                Self { $($field),+ }
            }

            /// Returns the origin.
            #[must_use]
            pub fn origin() -> Self {
                Self { $($field: S::zero()),+ }
            }

            /// Returns the coordinates in order.
            #[must_use]
            pub fn to_array(self) -> [S; $n] {
                [$(self.$field),+]
            }

            /// Returns the displacement from the origin to this point.
            #[must_use]
            pub fn to_vector(self) -> $Vector<S> {
                $Vector::new($(self.$field),+)
            }

            /// Converts every coordinate with an `as` cast.
            #[must_use]
            pub fn cast<T>(self) -> $Point<T>
            where
                T: Scalar,
                S: AsPrimitive<T>,
            {
                $Point { $($field: self.$field.as_()),+ }
            }

            /// Converts every coordinate, rejecting values `T` cannot hold.
            ///
            /// # Errors
            ///
            /// Returns a conversion error for the first coordinate that is
            /// NaN or out of range for `T`.
            pub fn try_cast<T>(self) -> Result<$Point<T>>
            where
                T: Scalar + NumCast,
                S: ToPrimitive,
            {
                let [$($field),+] = checked_cast(self.to_array())?;
                Ok($Point { $($field),+ })
            }

            /// Overwrites `self` with a converted copy of `source`.
            pub fn assign_from<O>(&mut self, source: &$Point<O>)
            where
                O: Scalar + AsPrimitive<S>,
            {
                *self = source.cast();
            }
        }

        impl<S: Scalar> Default for $Point<S> {
            fn default() -> Self {
                Self::origin()
            }
        }

        impl<S: Scalar> From<[S; $n]> for $Point<S> {
            fn from([$($field),+]: [S; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<S: Scalar> From<$Vector<S>> for $Point<S> {
            fn from(v: $Vector<S>) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl<S: Scalar + std::fmt::Display> std::fmt::Display for $Point<S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.to_vector(), f)
            }
        }

        impl<S> approx::AbsDiffEq for $Point<S>
        where
            S: Scalar + approx::AbsDiffEq,
            S::Epsilon: Copy,
        {
            type Epsilon = S::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl<S> approx::RelativeEq for $Point<S>
        where
            S: Scalar + approx::RelativeEq,
            S::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                S::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }
    };
}

impl_point!(Point2, Vector2, 2, [x, y]);
impl_point!(Point3, Vector3, 3, [x, y, z]);

impl<S: Scalar> From<Point2<S>> for nalgebra::Point2<S> {
    fn from(p: Point2<S>) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl<S: Scalar> From<nalgebra::Point2<S>> for Point2<S> {
    fn from(p: nalgebra::Point2<S>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<S: Scalar> From<Point3<S>> for nalgebra::Point3<S> {
    fn from(p: Point3<S>) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl<S: Scalar> From<nalgebra::Point3<S>> for Point3<S> {
    fn from(p: nalgebra::Point3<S>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

pub type Point2i = Point2<i32>;
pub type Point2u = Point2<u32>;
pub type Point2f = Point2<f32>;
pub type Point2d = Point2<f64>;
pub type Point3i = Point3<i32>;
pub type Point3u = Point3<u32>;
pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;
