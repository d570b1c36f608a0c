use thiserror::Error;

/// Raised when a vector is constructed or multiplied with unusable arguments.
///
/// The messages are fixed strings so callers can match on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Must provide at least one parameter")]
    MissingParameter,
    #[error("Single parameter should be a vector")]
    NotAVector,
    #[error("Must provide numeric parameters")]
    NonNumeric,
    #[error("Parameter should be a number or a vector")]
    InvalidMultiplier,
}
