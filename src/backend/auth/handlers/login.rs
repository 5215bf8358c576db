/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by email (404 when unknown)
 * 2. Verify password using bcrypt (401 when wrong)
 * 3. Issue a token
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `404 Not Found` - No user with that email
/// * `401 Unauthorized` - Password does not match
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(BackendError::bad_request("Email and password are required"));
    }

    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::UserNotFound
        })?;

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::BadPassword);
    }

    let token = state.tokens.issue(user.id, &user.email)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        user: user.to_response(),
        token,
    }))
}
