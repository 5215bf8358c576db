//! Database test fixtures
//!
//! Every call opens a fresh in-memory database with migrations applied, so
//! tests never share rows.

use axum::Router;
use noteboard::backend::auth::TokenService;
use noteboard::backend::routes::create_router;
use noteboard::backend::server::{memory_pool, AppState, MIN_BCRYPT_COST};

/// Secret the test apps sign tokens with
pub const TEST_SECRET: &str = "integration-test-secret";

pub async fn test_state() -> AppState {
    let pool = memory_pool().await.expect("Failed to open in-memory database");
    AppState::new(pool, TokenService::new(TEST_SECRET), MIN_BCRYPT_COST)
}

pub async fn test_app() -> Router {
    create_router(test_state().await, None)
}

/// Serve a fresh app on an ephemeral port, returning its base URL
pub async fn spawn_server() -> String {
    let app = test_app().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{}", addr)
}
