//! Note wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note placed on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub content: String,
    /// Board currently holding the note; changes only through a move
    pub board_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Body for note creation and content edits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteContentRequest {
    #[serde(default)]
    pub content: String,
}

/// Body for moving a note to another board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveNoteRequest {
    pub board_id: i64,
}
