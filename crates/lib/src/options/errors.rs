//! Error types for Options container operations.

use thiserror::Error;

/// Structured error types for Options container operations.
///
/// Mutation errors are raised before any state change, so a failed call
/// never leaves a container partially modified.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OptionsError {
    /// A mutation was attempted on a locked container
    #[error("Options is read only, key: {key}")]
    ReadOnly { key: String },

    /// A value of an unexpected type was encountered
    #[error("Options type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// An entry passed to `group_by` is missing the grouping key
    #[error("group_by '{group}': entry '{key}' has no such key")]
    MissingGroupKey { group: String, key: String },

    /// Input could not be coerced to the required shape
    #[error("Invalid options input: {reason}")]
    InvalidInput { reason: String },
}

impl OptionsError {
    /// Check if this error is a rejected mutation of a locked container
    pub fn is_read_only(&self) -> bool {
        matches!(self, OptionsError::ReadOnly { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, OptionsError::TypeMismatch { .. })
    }

    /// Get the key involved, if this error carries one
    pub fn key(&self) -> Option<&str> {
        match self {
            OptionsError::ReadOnly { key } | OptionsError::MissingGroupKey { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from OptionsError to the main Error type
impl From<OptionsError> for crate::Error {
    fn from(err: OptionsError) -> Self {
        crate::Error::Options(err)
    }
}
