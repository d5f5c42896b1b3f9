use std::fmt::Debug;

use num_traits::{Float, Num, NumCast, ToPrimitive};
use tracing::debug;

use crate::error::{ConversionError, Result};

/// A numeric type that can parametrize the geometric value types.
///
/// Implemented for `i32`, `u32`, `i64`, `u64`, `f32` and `f64`. Custom
/// numeric types (fixed-point, arbitrary precision, ...) implement this
/// marker together with [`Promote`](super::Promote) to take part in vector
/// arithmetic.
///
/// Vector types are never scalars, so `vector * vector` always selects the
/// elementwise operator and never the broadcast one:
///
/// ```compile_fail
/// fn scalar<T: geom::math::Scalar>() {}
/// scalar::<geom::math::Vector2<i32>>();
/// ```
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Num + 'static {}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(i32, u32, i64, u64, f32, f64);

/// Selects the floating-point type used for lengths and normalization.
///
/// `f32` stays in single precision. Every other built-in scalar, integers
/// included, is widened to `f64`.
pub trait FloatPrecision: Scalar {
    /// Floating-point type results are computed in.
    type Float: Scalar + Float;

    /// Converts a component into [`Self::Float`].
    fn to_float(self) -> Self::Float;
}

impl FloatPrecision for f32 {
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }
}

macro_rules! impl_double_precision {
    ($($t:ty),*) => {
        $(
            impl FloatPrecision for $t {
                type Float = f64;

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_double_precision!(i32, u32, i64, u64, f64);

/// Converts every value in `values` to `T`, failing on the first component
/// that `T` cannot represent.
pub(crate) fn checked_cast<S, T, const N: usize>(values: [S; N]) -> Result<[T; N]>
where
    S: Scalar + ToPrimitive,
    T: Scalar + NumCast,
{
    let mut out = [T::zero(); N];
    for (index, (slot, value)) in out.iter_mut().zip(values).enumerate() {
        *slot = <T as NumCast>::from(value).ok_or_else(|| {
            let target = std::any::type_name::<T>();
            debug!(index, target, ?value, "component is not representable");
            ConversionError::NotRepresentable { index, target }
        })?;
    }
    Ok(out)
}
