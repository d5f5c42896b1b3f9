use super::Scalar;

/// Common scalar type of a binary operation between `Self` and `Rhs`.
///
/// Every vector operator and vector function resolves its result type
/// through this trait. The built-in table follows the usual arithmetic
/// conversions: the wider integer wins, an unsigned type wins over a
/// signed type of the same width, any float wins over any integer, and
/// `f64` wins over `f32`. Custom scalars implement it for the pairs they
/// support.
///
/// ```
/// use geom::math::{Promote, Vector2};
///
/// let sum = Vector2::new(1_i32, 2) + Vector2::new(0.5_f32, 0.5);
/// let _: Vector2<f32> = sum;
/// assert_eq!(sum, Vector2::new(1.5_f32, 2.5));
/// ```
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    /// The scalar type of the result.
    type Output: Scalar;

    /// Converts a left-hand operand into the common type.
    fn promote_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts a right-hand operand into the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for the common type of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! promote {
    ($($l:ty, $r:ty => $o:ty;)*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $o;

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn promote_lhs(self) -> $o {
                    self as $o
                }

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn promote_rhs(rhs: $r) -> $o {
                    rhs as $o
                }
            }
        )*
    };
}

promote! {
    i32, i32 => i32;
    i32, u32 => u32;
    i32, i64 => i64;
    i32, u64 => u64;
    i32, f32 => f32;
    i32, f64 => f64;

    u32, i32 => u32;
    u32, u32 => u32;
    u32, i64 => i64;
    u32, u64 => u64;
    u32, f32 => f32;
    u32, f64 => f64;

    i64, i32 => i64;
    i64, u32 => i64;
    i64, i64 => i64;
    i64, u64 => u64;
    i64, f32 => f32;
    i64, f64 => f64;

    u64, i32 => u64;
    u64, u32 => u64;
    u64, i64 => u64;
    u64, u64 => u64;
    u64, f32 => f32;
    u64, f64 => f64;

    f32, i32 => f32;
    f32, u32 => f32;
    f32, i64 => f32;
    f32, u64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i32 => f64;
    f64, u32 => f64;
    f64, i64 => f64;
    f64, u64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}
