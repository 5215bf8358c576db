//! Board wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::note::Note;

/// A named board owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: i64,
    pub name: String,
    /// Owning user, fixed at creation
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Board detail response, the board plus the notes it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWithNotes {
    #[serde(flatten)]
    pub board: Board,
    pub notes: Vec<Note>,
}

/// Body for both board creation and rename
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardNameRequest {
    #[serde(default)]
    pub name: String,
}
