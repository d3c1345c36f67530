//! Error handling for the quote calculation engine
//!
//! Two error classes exist: configuration errors are fatal to an entire
//! batch run and surface before any record is processed; validation errors
//! are per-record, recovered inside the batch processor, and never abort
//! sibling records. Unknown materials and unmapped ZIP prefixes are defined
//! fallback paths, not errors.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A pricing profile field violates its invariant
    /// (negative rate, zero productivity, non-positive crew size)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A single record's field could not be coerced to its expected type
    #[error("invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl EngineError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
