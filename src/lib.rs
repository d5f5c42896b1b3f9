//! Generic geometric value types and vector algebra.
//!
//! Every type is parametrized over a [`Scalar`](math::Scalar). Vector
//! arithmetic between different scalar types resolves its result type
//! through [`Promote`](math::Promote).

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeomError, Result};
