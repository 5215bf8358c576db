/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so they run on the
 * blocking thread pool instead of stalling the async workers.
 */

use crate::backend::error::BackendError;

/// Hash a password with a fresh salt
pub async fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            BackendError::internal("password hashing task failed")
        })?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal("failed to hash password")
        })
}

/// Compare a password against a stored hash
///
/// The comparison itself is constant-time inside bcrypt.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, BackendError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            BackendError::internal("password verification task failed")
        })?
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal("password verification failed")
        })
}
