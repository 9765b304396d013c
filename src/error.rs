//! Custom error types for contact-book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Validation and lookup errors carry the
//! fixed messages shown to the user by the command dispatcher.

use thiserror::Error;

/// The main error type for contact-book operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A contact name failed validation
    #[error("Name must be at least 2 characters long.")]
    NameValidation,

    /// A phone number failed validation
    #[error("The phone number must be 10 digits long.")]
    PhoneValidation,

    /// A birthday failed validation
    #[error("Invalid date format. Use DD.MM.YYYY")]
    BirthdayValidation,

    /// A contact or phone number was looked up and not found
    #[error("Item not found: {item}")]
    ItemNotFound { item: String },

    /// A command was invoked without the arguments it needs
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactError {
    /// Create a "not found" error for a contact or phone
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound { item: item.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }

    /// Check if this is a field validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameValidation | Self::PhoneValidation | Self::BirthdayValidation
        )
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact-book operations
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ContactError::PhoneValidation.to_string(),
            "The phone number must be 10 digits long."
        );
        assert_eq!(
            ContactError::BirthdayValidation.to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert!(ContactError::NameValidation.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = ContactError::not_found("alice");
        assert_eq!(err.to_string(), "Item not found: alice");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_missing_arguments_error() {
        let err = ContactError::MissingArguments {
            usage: "add <name> <phone>",
        };
        assert_eq!(
            err.to_string(),
            "Not enough arguments. Usage: add <name> <phone>"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContactError = io_err.into();
        assert!(matches!(err, ContactError::Io(_)));
    }
}
