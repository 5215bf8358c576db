//! Note HTTP Handlers
//!
//! The note store trusts its callers, so each handler checks ownership
//! first: board ownership for create and list, note ownership for the rest,
//! and both note and destination board ownership for a move.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::routes::params::parse_id;
use crate::backend::server::state::AppState;
use crate::shared::{
    validate_note_content, MessageResponse, MoveNoteRequest, Note, NoteContentRequest,
};

fn note_not_found() -> BackendError {
    BackendError::not_found("Note not found or access denied")
}

fn board_not_found() -> BackendError {
    BackendError::not_found("Board not found or access denied")
}

/// Create a note on one of the caller's boards
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(board_id): Path<String>,
    payload: Result<Json<NoteContentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), BackendError> {
    let board_id = parse_id(&board_id, "board")?;
    let Json(request) = payload?;
    validate_note_content(&request.content)?;

    if !db::is_board_owner(&state.db_pool, board_id, user.id).await? {
        tracing::warn!("User {} cannot add notes to board {}", user.id, board_id);
        return Err(board_not_found());
    }

    let note = db::create_note(&state.db_pool, board_id, &request.content).await?;
    tracing::info!("User {} created note {} on board {}", user.id, note.id, board_id);

    Ok((StatusCode::CREATED, Json(note)))
}

/// List a board's notes, newest first
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<Note>>, BackendError> {
    let board_id = parse_id(&board_id, "board")?;

    if !db::is_board_owner(&state.db_pool, board_id, user.id).await? {
        return Err(board_not_found());
    }

    let notes = db::list_notes_by_board(&state.db_pool, board_id).await?;
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Note>, BackendError> {
    let id = parse_id(&id, "note")?;

    if !db::is_note_owner(&state.db_pool, id, user.id).await? {
        return Err(note_not_found());
    }

    let note = db::get_note(&state.db_pool, id)
        .await?
        .ok_or_else(note_not_found)?;
    Ok(Json(note))
}

/// Replace a note's content
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<NoteContentRequest>, JsonRejection>,
) -> Result<Json<Note>, BackendError> {
    let id = parse_id(&id, "note")?;
    let Json(request) = payload?;
    validate_note_content(&request.content)?;

    if !db::is_note_owner(&state.db_pool, id, user.id).await? {
        return Err(note_not_found());
    }

    let note = db::update_note(&state.db_pool, id, &request.content).await?;
    tracing::info!("User {} edited note {}", user.id, id);

    Ok(Json(note))
}

/// Move a note to another board of the same user
pub async fn move_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<MoveNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, BackendError> {
    let id = parse_id(&id, "note")?;
    let Json(request) = payload?;

    if !db::is_note_owner(&state.db_pool, id, user.id).await? {
        return Err(note_not_found());
    }

    if !db::is_board_owner(&state.db_pool, request.board_id, user.id).await? {
        tracing::warn!(
            "User {} tried to move note {} to foreign board {}",
            user.id,
            id,
            request.board_id
        );
        return Err(board_not_found());
    }

    let note = db::move_note(&state.db_pool, id, request.board_id).await?;
    tracing::info!("User {} moved note {} to board {}", user.id, id, request.board_id);

    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, "note")?;

    if !db::is_note_owner(&state.db_pool, id, user.id).await? {
        return Err(note_not_found());
    }

    db::delete_note(&state.db_pool, id).await?;
    tracing::info!("User {} deleted note {}", user.id, id);

    Ok(Json(MessageResponse::new("Note deleted successfully")))
}
