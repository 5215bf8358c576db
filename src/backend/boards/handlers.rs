//! Board HTTP Handlers
//!
//! Every handler runs behind the auth middleware. Mutating handlers follow
//! the same order: parse the id, validate the body, check ownership, then
//! write.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::notes::db::list_notes_by_board;
use crate::backend::routes::params::parse_id;
use crate::backend::server::state::AppState;
use crate::shared::{validate_board_name, Board, BoardNameRequest, BoardWithNotes, MessageResponse};

fn board_not_found() -> BackendError {
    BackendError::not_found("Board not found or access denied")
}

/// Create a board
pub async fn create_board(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<BoardNameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Board>), BackendError> {
    let Json(request) = payload?;
    validate_board_name(&request.name)?;

    let board = db::create_board(&state.db_pool, &request.name, user.id).await?;
    tracing::info!("User {} created board {}", user.id, board.id);

    Ok((StatusCode::CREATED, Json(board)))
}

/// List the caller's boards, newest first
pub async fn list_boards(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Board>>, BackendError> {
    let boards = db::list_boards_by_user(&state.db_pool, user.id).await?;
    Ok(Json(boards))
}

/// Get one board with its notes
pub async fn get_board(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<BoardWithNotes>, BackendError> {
    let id = parse_id(&id, "board")?;

    let board = db::get_board(&state.db_pool, id, user.id)
        .await?
        .ok_or_else(board_not_found)?;
    let notes = list_notes_by_board(&state.db_pool, board.id).await?;

    Ok(Json(BoardWithNotes { board, notes }))
}

/// Rename a board
pub async fn update_board(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<BoardNameRequest>, JsonRejection>,
) -> Result<Json<Board>, BackendError> {
    let id = parse_id(&id, "board")?;
    let Json(request) = payload?;
    validate_board_name(&request.name)?;

    let board = db::update_board(&state.db_pool, id, user.id, &request.name)
        .await?
        .ok_or_else(board_not_found)?;
    tracing::info!("User {} renamed board {}", user.id, board.id);

    Ok(Json(board))
}

/// Delete a board and all of its notes
pub async fn delete_board(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, "board")?;

    db::delete_board(&state.db_pool, id, user.id)
        .await?
        .ok_or_else(board_not_found)?;
    tracing::info!("User {} deleted board {}", user.id, id);

    Ok(Json(MessageResponse::new("Board deleted successfully")))
}
