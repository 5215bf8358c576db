/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler and the
 * auth middleware. It is cheap to clone: the pool is reference-counted
 * internally and the token service sits behind an `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers that need only one part
 * extract it directly, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    /// Token issuing and verification
    pub tokens: Arc<TokenService>,

    /// bcrypt work factor used by registration
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(tokens),
            bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// State over a fresh in-memory database, minimum bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let pool = crate::backend::server::config::memory_pool()
        .await
        .expect("in-memory database");
    AppState::new(
        pool,
        TokenService::new("test-secret"),
        crate::backend::server::config::MIN_BCRYPT_COST,
    )
}
