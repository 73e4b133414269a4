use thiserror::Error;

/// Validation failures raised by form drafts and in-memory stores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid {kind} id '{value}'")]
    InvalidId { kind: &'static str, value: String },

    #[error("{0} does not match")]
    Mismatch(&'static str),

    #[error("'{0}' already exists")]
    Duplicate(String),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}
