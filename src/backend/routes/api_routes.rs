/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Protected (bearer token)
 * - `GET /api/auth/me` - Current user
 * - `GET|POST /api/boards` - List or create boards
 * - `GET|PUT|DELETE /api/boards/{id}` - One board
 * - `GET|POST /api/boards/{id}/notes` - A board's notes
 * - `GET|PUT|DELETE /api/notes/{id}` - One note
 * - `PATCH /api/notes/{id}/move` - Move a note to another board
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::boards;
use crate::backend::middleware::auth_middleware;
use crate::backend::notes;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes behind the auth middleware
///
/// `route_layer` runs the guard only for matched routes, so unknown paths
/// still reach the fallback.
pub fn protected_api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route(
            "/api/boards",
            get(boards::list_boards).post(boards::create_board),
        )
        .route(
            "/api/boards/{id}",
            get(boards::get_board)
                .put(boards::update_board)
                .delete(boards::delete_board),
        )
        .route(
            "/api/boards/{id}/notes",
            get(notes::list_notes).post(notes::create_note),
        )
        .route(
            "/api/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/api/notes/{id}/move", patch(notes::move_note))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
}

/// All API routes
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    public_api_routes().merge(protected_api_routes(state))
}
