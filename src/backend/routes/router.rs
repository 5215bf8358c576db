/**
 * Router Configuration
 *
 * Combines the API routes with the health check, the JSON 404 fallback and
 * the outer layers (request tracing and CORS).
 */

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared with every handler
/// * `cors_origin` - Single allowed browser origin; any origin when `None`
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Router<()> {
    configure_api_routes(&app_state)
        .route("/health", get(health))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}

async fn fallback() -> BackendError {
    BackendError::not_found("Route not found")
}

/// CORS for the configured origin
///
/// An origin that is not a valid header value is ignored with a warning and
/// the permissive layer is used.
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(value) => {
            tracing::info!("CORS: allowing origin {}", origin);
            CorsLayer::new()
                .allow_origin(value)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        }
        Err(e) => {
            tracing::warn!("Invalid CORS_ORIGIN {:?}: {}, allowing any origin", origin, e);
            CorsLayer::permissive()
        }
    }
}
