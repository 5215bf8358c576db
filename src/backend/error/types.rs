/**
 * Backend Error Types
 *
 * # Error Categories
 *
 * ## Request errors
 *
 * - Malformed path ids, missing body fields, blank names or content
 *
 * ## Authentication errors
 *
 * - Missing or malformed Authorization header, bad token signature,
 *   tokens naming a user that no longer exists
 * - Duplicate registration, unknown email, wrong password
 *
 * ## Ownership errors
 *
 * Rows owned by another user are reported exactly like rows that do not
 * exist, so the response never reveals whether another user's board exists.
 *
 * ## Infrastructure errors
 *
 * Database, migration, hashing and signing failures. Their details are
 * logged, never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use noteboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Board not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request was syntactically wrong (bad id, missing field)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Guard rejection
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Row absent or owned by someone else
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Registration with an email already in the credential store
    #[error("Email already registered")]
    EmailTaken,

    /// Login with an email nobody registered
    #[error("User not found")]
    UserNotFound,

    /// Login with the wrong password
    #[error("Incorrect password")]
    BadPassword,

    /// Validation failure (blank board name, blank note content)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Token signing or verification failure
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Anything else that is the server's fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest`, `SharedError` - 400
    /// - `Unauthorized`, `BadPassword`, `Token` - 401
    /// - `NotFound`, `UserNotFound` - 404
    /// - `EmailTaken` - 409
    /// - `Database`, `Migration`, `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } | Self::BadPassword | Self::Token(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound { .. } | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Database(_) | Self::Migration(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the client
    ///
    /// Server-side failures collapse to a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message } => message.clone(),
            Self::EmailTaken | Self::UserNotFound | Self::BadPassword => self.to_string(),
            Self::SharedError(err) => err.client_message().to_string(),
            Self::Token(_) => "Invalid token".to_string(),
            Self::Database(_) | Self::Migration(_) | Self::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::bad_request("Invalid board ID").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::unauthorized("Missing token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(BackendError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BackendError::BadPassword.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let error: BackendError = SharedError::validation("name", "Board name is required").into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Board name is required");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let error = BackendError::internal("bcrypt exploded at line 12");
        assert_eq!(error.message(), "Internal server error");

        let error = BackendError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_not_found_keeps_message() {
        let error = BackendError::not_found("Note not found");
        assert_eq!(error.message(), "Note not found");
    }
}
