use num_traits::{AsPrimitive, NumCast, ToPrimitive};

use crate::error::Result;
use crate::math::{checked_cast, Scalar};

/// Extents of a 2D region.
///
/// Extents are expected to be non-negative; this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions2<S> {
    pub width: S,
    pub height: S,
}

/// Extents of a 3D region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions3<S> {
    pub width: S,
    pub height: S,
    pub depth: S,
}

macro_rules! impl_dimensions {
    ($Dimensions:ident, [$($field:ident),+]) => {
        impl<S: Scalar> $Dimensions<S> {
            /// Creates new extents.
            #[must_use]
            pub const fn new($($field: S),+) -> Self {
                Self { $($field),+ }
            }

            /// Converts every extent with an `as` cast.
            #[must_use]
            pub fn cast<T>(self) -> $Dimensions<T>
            where
                T: Scalar,
                S: AsPrimitive<T>,
            {
                $Dimensions { $($field: self.$field.as_()),+ }
            }

            /// Converts every extent, rejecting values `T` cannot hold.
            ///
            /// # Errors
            ///
            /// Returns a conversion error for the first extent that is NaN
            /// or out of range for `T`.
            pub fn try_cast<T>(self) -> Result<$Dimensions<T>>
            where
                T: Scalar + NumCast,
                S: ToPrimitive,
            {
                let [$($field),+] = checked_cast([$(self.$field),+])?;
                Ok($Dimensions { $($field),+ })
            }

            /// Overwrites `self` with a converted copy of `source`.
            pub fn assign_from<O>(&mut self, source: &$Dimensions<O>)
            where
                O: Scalar + AsPrimitive<S>,
            {
                *self = source.cast();
            }
        }

        impl<S: Scalar> Default for $Dimensions<S> {
            fn default() -> Self {
                Self { $($field: S::zero()),+ }
            }
        }
    };
}

impl_dimensions!(Dimensions2, [width, height]);
impl_dimensions!(Dimensions3, [width, height, depth]);

impl<S: Scalar> Dimensions2<S> {
    /// Area covered by the extents.
    #[must_use]
    pub fn area(self) -> S {
        self.width * self.height
    }
}

impl<S: Scalar> Dimensions3<S> {
    /// Volume covered by the extents.
    #[must_use]
    pub fn volume(self) -> S {
        self.width * self.height * self.depth
    }
}

pub type Dimensions2i = Dimensions2<i32>;
pub type Dimensions2u = Dimensions2<u32>;
pub type Dimensions2f = Dimensions2<f32>;
pub type Dimensions2d = Dimensions2<f64>;
pub type Dimensions3i = Dimensions3<i32>;
pub type Dimensions3u = Dimensions3<u32>;
pub type Dimensions3f = Dimensions3<f32>;
pub type Dimensions3d = Dimensions3<f64>;
