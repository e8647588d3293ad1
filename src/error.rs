//! Error types.
//!
//! Generation itself never fails; errors only arise at the edges: reading
//! or parsing input, and the optional strict validation pass.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading or validating timetable input.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("failed to read timetable input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed timetable input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timetable input failed validation ({} issue(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

/// Result alias for fallible timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
