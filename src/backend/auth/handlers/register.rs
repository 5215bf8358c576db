/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Reject blank email or password (400)
 * 2. Reject an email that is already registered (409)
 * 3. Hash the password with bcrypt
 * 4. Store the user and issue a token
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing, storage or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "hunter22", "name": "Ada" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;

    if request.email.trim().is_empty() || request.password.is_empty() {
        tracing::warn!("Registration rejected: missing email or password");
        return Err(BackendError::bad_request("Email and password are required"));
    }

    tracing::info!("Registration request for: {}", request.email);

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(BackendError::EmailTaken);
    }

    let password_hash = hash_password(&request.password, state.bcrypt_cost).await?;

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let user = create_user(&state.db_pool, &request.email, &password_hash, name)
        .await
        .map_err(|e| {
            // A concurrent registration can win between the lookup and the insert
            let unique = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if unique {
                tracing::warn!("Email already registered: {}", request.email);
                BackendError::EmailTaken
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                BackendError::Database(e)
            }
        })?;

    let token = state.tokens.issue(user.id, &user.email)?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.to_response(),
            token,
        }),
    ))
}
