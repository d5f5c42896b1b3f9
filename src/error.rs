use thiserror::Error;

/// Top-level error type for the geom crate.
///
/// Arithmetic never fails: division by zero, zero-length normalization and
/// overflow behave exactly like the underlying scalar arithmetic. Errors only
/// come from the checked conversions.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors related to checked scalar conversions.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("component {index} is not representable as {target}")]
    NotRepresentable { index: usize, target: &'static str },
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
