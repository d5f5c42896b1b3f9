//! Square matrices stored as flat column-major arrays.
//!
//! Constructors take their arguments in row-major reading order and shuffle
//! them into column-major storage, the layout OpenGL and nalgebra use. The
//! element at `(row, col)` of an `N x N` matrix lives at `values[col * N + row]`.

use num_traits::{AsPrimitive, NumCast, ToPrimitive};

use super::{checked_cast, Scalar};
use crate::error::{GeomError, Result};

macro_rules! impl_matrix {
    ($Matrix:ident, $n:literal, $len:literal) => {
        impl<S: Scalar> $Matrix<S> {
            /// Number of rows and columns.
            pub const DIM: usize = $n;

            /// Returns the null matrix.
            #[must_use]
            pub fn zeros() -> Self {
                Self { values: [S::zero(); $len] }
            }

            /// Returns the identity matrix.
            #[must_use]
            pub fn identity() -> Self {
                let mut m = Self::zeros();
                for i in 0..$n {
                    m.values[i * $n + i] = S::one();
                }
                m
            }

            /// Builds a matrix from values already in column-major order.
            ///
            /// # Errors
            ///
            /// Returns [`GeomError::ComponentCount`] if `values` does not hold
            #[doc = concat!("exactly ", stringify!($len), " elements.")]
            pub fn from_column_slice(values: &[S]) -> Result<Self> {
                let values = values.try_into().map_err(|_| GeomError::ComponentCount {
                    expected: $len,
                    found: values.len(),
                })?;
                Ok(Self { values })
            }

            /// Returns the element at `row`, `col`, or `None` if out of range.
            #[must_use]
            pub fn get(&self, row: usize, col: usize) -> Option<S> {
                if row < $n && col < $n {
                    Some(self.values[col * $n + row])
                } else {
                    None
                }
            }

            /// Returns the column-major storage.
            #[must_use]
            pub fn as_slice(&self) -> &[S] {
                &self.values
            }

            /// Converts every element with an `as` cast.
            #[must_use]
            pub fn cast<T>(&self) -> $Matrix<T>
            where
                T: Scalar,
                S: AsPrimitive<T>,
            {
                $Matrix { values: self.values.map(AsPrimitive::as_) }
            }

            /// Converts every element, rejecting values `T` cannot hold.
            ///
            /// # Errors
            ///
            /// Returns a conversion error naming the first column-major index
            /// that is NaN or out of range for `T`.
            pub fn try_cast<T>(&self) -> Result<$Matrix<T>>
            where
                T: Scalar + NumCast,
                S: ToPrimitive,
            {
                Ok($Matrix { values: checked_cast(self.values)? })
            }

            /// Overwrites `self` with a converted copy of `source`.
            pub fn assign_from<O>(&mut self, source: &$Matrix<O>)
            where
                O: Scalar + AsPrimitive<S>,
            {
                *self = source.cast();
            }
        }

        impl<S: Scalar> Default for $Matrix<S> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<S: Scalar> TryFrom<&[S]> for $Matrix<S> {
            type Error = GeomError;

            fn try_from(values: &[S]) -> Result<Self> {
                Self::from_column_slice(values)
            }
        }

        impl<S: Scalar> From<$Matrix<S>> for nalgebra::SMatrix<S, $n, $n> {
            fn from(m: $Matrix<S>) -> Self {
                nalgebra::SMatrix::from_column_slice(&m.values)
            }
        }

        impl<S: Scalar> From<nalgebra::SMatrix<S, $n, $n>> for $Matrix<S> {
            fn from(m: nalgebra::SMatrix<S, $n, $n>) -> Self {
                let mut values = [S::zero(); $len];
                values.copy_from_slice(m.as_slice());
                Self { values }
            }
        }
    };
}

/// A 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2<S> {
    /// Column-major storage.
    pub values: [S; 4],
}

impl<S: Scalar> Matrix2<S> {
    /// Creates a matrix from elements listed row by row.
    #[must_use]
    pub const fn new(r1c1: S, r1c2: S, r2c1: S, r2c2: S) -> Self {
        Self {
            values: [r1c1, r2c1, r1c2, r2c2],
        }
    }
}

impl_matrix!(Matrix2, 2, 4);

/// A 3x3 matrix, used to manipulate 2D geometry.
///
/// The null matrix from [`Matrix3::zeros`] zeroes any matrix multiplied by it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3<S> {
    /// Column-major storage.
    pub values: [S; 9],
}

impl<S: Scalar> Matrix3<S> {
    /// Creates a matrix from elements listed row by row.
    #[must_use]
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r1c1: S, r1c2: S, r1c3: S,
        r2c1: S, r2c2: S, r2c3: S,
        r3c1: S, r3c2: S, r3c3: S,
    ) -> Self {
        Self {
            values: [r1c1, r2c1, r3c1, r1c2, r2c2, r3c2, r1c3, r2c3, r3c3],
        }
    }
}

impl_matrix!(Matrix3, 3, 9);

/// A 4x4 matrix, used to manipulate 3D geometry in homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4<S> {
    /// Column-major storage.
    pub values: [S; 16],
}

impl<S: Scalar> Matrix4<S> {
    /// Creates a matrix from elements listed row by row.
    #[must_use]
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        r1c1: S, r1c2: S, r1c3: S, r1c4: S,
        r2c1: S, r2c2: S, r2c3: S, r2c4: S,
        r3c1: S, r3c2: S, r3c3: S, r3c4: S,
        r4c1: S, r4c2: S, r4c3: S, r4c4: S,
    ) -> Self {
        Self {
            values: [
                r1c1, r2c1, r3c1, r4c1,
                r1c2, r2c2, r3c2, r4c2,
                r1c3, r2c3, r3c3, r4c3,
                r1c4, r2c4, r3c4, r4c4,
            ],
        }
    }
}

impl_matrix!(Matrix4, 4, 16);

pub type Matrix2i = Matrix2<i32>;
pub type Matrix2u = Matrix2<u32>;
pub type Matrix2f = Matrix2<f32>;
pub type Matrix2d = Matrix2<f64>;
pub type Matrix3i = Matrix3<i32>;
pub type Matrix3u = Matrix3<u32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4i = Matrix4<i32>;
pub type Matrix4u = Matrix4<u32>;
pub type Matrix4l = Matrix4<i64>;
pub type Matrix4ul = Matrix4<u64>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;
