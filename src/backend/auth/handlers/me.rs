/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * Returns the user the auth middleware resolved from the bearer token. The
 * desktop client calls this at startup to validate a saved session.
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::UserResponse;

pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&state.db_pool, auth_user.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Authenticated user vanished: {}", auth_user.id);
            BackendError::unauthorized("User not found")
        })?;

    Ok(Json(user.to_response()))
}
