//! Session Persistence
//!
//! The bearer token survives restarts in `session.toml` under the platform
//! config directory. A restored token is only trusted after `/api/auth/me`
//! accepts it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::api::BoardApi;
use crate::client::error::ClientError;
use crate::shared::UserResponse;

const APP_DIR: &str = "noteboard";
const SESSION_FILE: &str = "session.toml";

/// What is written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Reads and writes the session file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store in the platform config directory, if there is one
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::at(dir.join(APP_DIR).join(SESSION_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved session, `None` when nothing was saved
    pub fn load(&self) -> Result<Option<Session>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(toml::from_str(&text)?))
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(session)?)?;
        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Forget the saved session (logout)
    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Check a restored token against the server
///
/// A token the server rejects is cleared from disk; other failures (server
/// down) keep it for the next attempt.
pub async fn validate_session<A: BoardApi>(
    api: &A,
    store: &SessionStore,
) -> Result<UserResponse, ClientError> {
    match api.me().await {
        Ok(user) => Ok(user),
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Saved session rejected, clearing it");
            store.clear()?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join(SESSION_FILE));

        assert_eq!(store.load().unwrap(), None);

        let session = Session {
            token: "abc.def.ghi".to_string(),
            email: "ada@example.com".to_string(),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_session_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "token = ").unwrap();

        let result = SessionStore::at(path).load();
        assert!(matches!(result, Err(ClientError::Session(_))));
    }
}
