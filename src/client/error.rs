//! Client Error Types
//!
//! Errors raised by the HTTP client, the board synchronizer and session
//! persistence.

use thiserror::Error;

use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, the server was never reached or the body was unreadable
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    /// A protected call was made without a token
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Local input failed validation before anything was sent
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// A board or note the caller named is not in local state
    #[error("{0} not found")]
    Missing(&'static str),

    /// The entity exists only locally and has no server id yet
    #[error("{0} is still being saved")]
    NotPersisted(&'static str),

    #[error("Session storage error: {0}")]
    Session(String),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status when the server rejected the request
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The saved token no longer works and the user must sign in again
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated) || self.status() == Some(401)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Session(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        Self::Session(format!("invalid session file: {}", err))
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Session(format!("failed to encode session: {}", err))
    }
}
