//! Data models for Bookshelf

pub mod book;
pub mod user;

use serde::Serialize;
use serde_json::Value;
use validator::ValidationError;

use crate::error::{AppError, AppResult, FieldViolation};

// Re-export commonly used types
pub use book::{Book, CreateBook, NewBook, UpdateBook};
pub use user::{CreateUser, NewUser, UpdateUser, User};

/// Result of a partial update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Field rule: a JSON string with at least one character
pub(crate) fn non_empty_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(()),
        _ => Err(ValidationError::new("non_empty_string")),
    }
}

/// Field rule: a JSON string of at least six characters
pub(crate) fn password_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) if s.chars().count() >= 6 => Ok(()),
        _ => Err(ValidationError::new("password_string")),
    }
}

/// Take the string out of a field that validation already accepted
pub(crate) fn string_field(field: &str, value: Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(AppError::Validation(vec![FieldViolation {
            field: field.to_string(),
            message: format!("{} must be a string", field),
        }])),
    }
}
