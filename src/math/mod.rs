//! Scalars, type promotion, vectors and matrices.

pub mod matrix;
mod ops;
mod promote;
mod scalar;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use promote::{Promote, Promoted};
pub(crate) use scalar::checked_cast;
pub use scalar::{FloatPrecision, Scalar};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
