//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and input validation.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,

    // Not found errors
    DecisionNotFound,

    // Infrastructure errors
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::DecisionNotFound => "DECISION_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a not-found error for a decision id.
    pub fn decision_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::DecisionNotFound,
            format!("Decision not found: {}", id),
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
        };
        DomainError::new(code, err.to_string())
    }
}
