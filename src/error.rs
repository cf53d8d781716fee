//! Error types for the form engine
//!
//! Field validation failures are not errors here: they are reported as
//! data through [`crate::state::FieldErrors`]. The types below cover the
//! cases where an operation itself cannot proceed.

use crate::state::FieldName;
use thiserror::Error;

/// Malformed lookup table, raised once at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("region at position {index} has an empty state name")]
    EmptyState { index: usize },

    #[error("state '{0}' is configured more than once")]
    DuplicateState(String),

    #[error("state '{state}' has an empty city name")]
    EmptyCity { state: String },

    #[error("city '{city}' is listed twice under state '{state}'")]
    DuplicateCity { state: String, city: String },
}

/// Failure reported by a submit collaborator
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("failed to serialize form values: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Rejected form state machine operation
#[derive(Debug, Error)]
pub enum FormError {
    #[error("value kind does not match field {0}")]
    TypeMismatch(FieldName),

    #[error("{0} cannot be selected until a parent option is chosen")]
    SelectionDisabled(FieldName),

    #[error("'{value}' is not an available option for {field}")]
    UnavailableOption { field: FieldName, value: String },

    #[error("a submission is already in progress")]
    SubmitInProgress,

    #[error(transparent)]
    Submit(#[from] SubmitError),
}
