//! Error types for parameter resolution and payload building.

use std::fmt;

/// Errors that can occur while resolving parameter defaults or building
/// transaction parameters.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// The type registry produced a tag with no known default.
    #[error("unable to determine default type for {descriptor}")]
    UnrecognizedType { descriptor: String },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamError {
    /// Returns the per-field failures, if this is a validation error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
