/**
 * Authentication Middleware
 *
 * Protects every board and note route. Each request walks the same steps,
 * with no caching between requests:
 *
 * 1. Read the `Authorization` header
 * 2. Strip the `Bearer ` prefix
 * 3. Verify the token signature and payload
 * 4. Look the user up in the credential store
 *
 * Any failed step rejects with 401. On success the resolved
 * `AuthenticatedUser` is attached to the request extensions, where handlers
 * pick it up through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Identity attached to an authorized request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
}

/// Why the guard turned a request away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    MissingHeader,
    MalformedHeader,
    InvalidToken,
    UnknownUser,
}

impl GuardRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingHeader => "Missing authorization token",
            Self::MalformedHeader => "Malformed authorization header",
            Self::InvalidToken => "Invalid token",
            Self::UnknownUser => "User not found",
        }
    }
}

impl From<GuardRejection> for BackendError {
    fn from(rejection: GuardRejection) -> Self {
        BackendError::unauthorized(rejection.message())
    }
}

/// Pull the bearer token out of the request headers
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, GuardRejection> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(GuardRejection::MissingHeader)?
        .to_str()
        .map_err(|_| GuardRejection::MalformedHeader)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(GuardRejection::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(GuardRejection::MalformedHeader);
    }

    Ok(token)
}

/// Run every guard step against a set of headers
///
/// Database failures during the user lookup are server errors, not 401s.
pub async fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
    pool: &SqlitePool,
) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers).map_err(|rejection| {
        tracing::warn!("Rejected request: {:?}", rejection);
        rejection
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        GuardRejection::InvalidToken
    })?;

    let user = get_user_by_id(pool, claims.id).await?.ok_or_else(|| {
        tracing::warn!("Token names unknown user: {}", claims.id);
        GuardRejection::UnknownUser
    })?;

    Ok(AuthenticatedUser {
        id: user.id,
        email: user.email,
    })
}

/// Authentication middleware
///
/// Applied with `route_layer` so unmatched paths still fall through to the
/// 404 fallback instead of answering 401.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &app_state.tokens, &app_state.db_pool).await?;

    tracing::debug!("Authenticated user {} ({})", user.id, user.email);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects with
/// 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(GuardRejection::MissingHeader.message())
            })
    }
}
