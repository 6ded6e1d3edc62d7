//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A field failed validation; the mutation was aborted with no state
    /// change.
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Durable storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] decibel_kv::StorageError),
}

impl CommerceError {
    /// Shorthand for a field-level validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CommerceError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CommerceError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
