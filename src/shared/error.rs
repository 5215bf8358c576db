//! Shared Error Types
//!
//! This module defines error types that are shared between the client and backend.
//! These errors represent input validation failures that both sides check before
//! a board or note is written.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed validation (empty board name, empty note content)
//!
//! # Usage
//!
//! ```rust
//! use noteboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Board name is required");
//! assert!(error.to_string().contains("name"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message without the field prefix, suitable for API responses
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

/// Validate a board name.
///
/// Fails with a validation error on the `name` field when nothing but
/// whitespace remains. The name itself is stored as given.
pub fn validate_board_name(name: &str) -> Result<(), SharedError> {
    if name.trim().is_empty() {
        return Err(SharedError::validation("name", "Board name is required"));
    }
    Ok(())
}

/// Validate note content.
pub fn validate_note_content(content: &str) -> Result<(), SharedError> {
    if content.trim().is_empty() {
        return Err(SharedError::validation("content", "Note content is required"));
    }
    Ok(())
}
