/**
 * Server Initialization
 *
 * Builds the application state and the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build the token service from `JWT_SECRET`
 * 3. Assemble `AppState`
 * 4. Create the router with CORS and request tracing
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{open_pool, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing noteboard backend server");

    let pool = open_pool(&config.database_url).await?;
    let tokens = TokenService::from_env();
    let state = AppState::new(pool, tokens, config.bcrypt_cost);

    Ok(create_router(state, config.cors_origin.as_deref()))
}
