//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Not found errors
    DisplayNotFound,
    GroupNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DisplayNotFound => "DISPLAY_NOT_FOUND",
            ErrorCode::GroupNotFound => "GROUP_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// This is the error type of the persistence ports. The in-memory adapters
/// never produce it, but a fallible backend reports through it.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a storage error for a failed backend operation.
    pub fn storage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message).with_detail("operation", operation)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DisplayNotFound, "Display not found");
        assert_eq!(format!("{}", err), "[DISPLAY_NOT_FOUND] Display not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InternalError, "Broken")
            .with_detail("display", "d1")
            .with_detail("reason", "lost");

        assert_eq!(err.details.get("display"), Some(&"d1".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"lost".to_string()));
    }

    #[test]
    fn storage_error_records_operation() {
        let err = DomainError::storage("insert", "disk full");
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.details.get("operation"), Some(&"insert".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::GroupNotFound), "GROUP_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
    }
}
