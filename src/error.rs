//! Error types for DLN proof generation and verification

use thiserror::Error;

/// Structural failures of `prove` and `verify`.
///
/// A proof that is well formed but fails its algebraic check is not an
/// error: the verify entry points report it as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DlnError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Integer needs {required} bytes but the buffer holds {capacity}")]
    EncodingOverflow { required: usize, capacity: usize },

    #[error("Malformed proof input: {0}")]
    MalformedInput(String),

    #[error("Secure random source failed: {0}")]
    RandomnessFailure(String),
}

pub type Result<T> = std::result::Result<T, DlnError>;
