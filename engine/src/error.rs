//! Error handling for the Outbreak Risk Analysis Engine

use thiserror::Error;

use shared::FieldError;

/// Engine error types
///
/// Structurally invalid input is the only failure mode: numeric edge cases,
/// empty forecasts, and unknown recommendation keys are all handled by
/// defined fallback behavior. Nothing is transient, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid input: {message} ({field})")]
    InvalidInput {
        field: &'static str,
        message: &'static str,
    },
}

impl From<FieldError> for EngineError {
    fn from(err: FieldError) -> Self {
        EngineError::InvalidInput {
            field: err.field,
            message: err.message,
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
