//! Client State Model
//!
//! In-memory mirror of the user's boards and notes. Boards and notes keep
//! the order they are displayed in; the server never stores note order, so
//! local reordering lasts until the next full refetch.
//!
//! Entities created locally carry a `ClientId::Temporary` until the server
//! confirms them. Every mutation here is purely local; `sync` decides when
//! to call them and what to send to the server.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::{Board, BoardWithNotes, Note};

/// Identity of a board or note on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientId {
    /// Assigned locally, waiting for the server
    Temporary(Uuid),
    /// Server-assigned id
    Persisted(i64),
}

impl ClientId {
    pub fn temporary() -> Self {
        Self::Temporary(Uuid::new_v4())
    }

    /// Server id, if the entity has one
    pub fn persisted(self) -> Option<i64> {
        match self {
            Self::Persisted(id) => Some(id),
            Self::Temporary(_) => None,
        }
    }

    pub fn is_temporary(self) -> bool {
        matches!(self, Self::Temporary(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientNote {
    pub id: ClientId,
    pub content: String,
    /// Board the note currently sits on locally
    pub board_id: ClientId,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for ClientNote {
    fn from(note: Note) -> Self {
        Self {
            id: ClientId::Persisted(note.id),
            content: note.content,
            board_id: ClientId::Persisted(note.board_id),
            created_at: note.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientBoard {
    pub id: ClientId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub notes: Vec<ClientNote>,
}

impl From<BoardWithNotes> for ClientBoard {
    fn from(detail: BoardWithNotes) -> Self {
        Self {
            id: ClientId::Persisted(detail.board.id),
            name: detail.board.name,
            created_at: detail.board.created_at,
            notes: detail.notes.into_iter().map(ClientNote::from).collect(),
        }
    }
}

/// Where a note sat before it was relocated or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotePosition {
    pub board_id: ClientId,
    pub index: usize,
}

/// Boards, their notes, and the drag in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub boards: Vec<ClientBoard>,
    /// Note being dragged, `None` when idle
    pub dragged: Option<ClientNote>,
    /// Most recent synchronization failure, for display
    pub last_error: Option<String>,
    /// Local state may disagree with the server (a failure could not be
    /// recovered by a refetch)
    pub stale: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a server snapshot
    ///
    /// A drag in progress survives only if its note still exists, and then
    /// follows the note's server-side board.
    pub fn replace_all(&mut self, snapshot: Vec<BoardWithNotes>) {
        self.boards = snapshot.into_iter().map(ClientBoard::from).collect();
        self.stale = false;

        if let Some(dragged) = self.dragged.take() {
            self.dragged = self.note(dragged.id).cloned();
        }
    }

    pub fn board(&self, id: ClientId) -> Option<&ClientBoard> {
        self.boards.iter().find(|board| board.id == id)
    }

    pub(crate) fn board_mut(&mut self, id: ClientId) -> Option<&mut ClientBoard> {
        self.boards.iter_mut().find(|board| board.id == id)
    }

    pub fn note(&self, id: ClientId) -> Option<&ClientNote> {
        self.boards
            .iter()
            .flat_map(|board| board.notes.iter())
            .find(|note| note.id == id)
    }

    pub(crate) fn note_mut(&mut self, id: ClientId) -> Option<&mut ClientNote> {
        self.boards
            .iter_mut()
            .flat_map(|board| board.notes.iter_mut())
            .find(|note| note.id == id)
    }

    /// Current position of a note
    pub fn note_position(&self, id: ClientId) -> Option<NotePosition> {
        self.boards.iter().find_map(|board| {
            board
                .notes
                .iter()
                .position(|note| note.id == id)
                .map(|index| NotePosition {
                    board_id: board.id,
                    index,
                })
        })
    }

    /// Add a board that exists only locally, newest first
    pub fn add_board_optimistic(&mut self, name: &str) -> ClientId {
        let id = ClientId::temporary();
        self.boards.insert(
            0,
            ClientBoard {
                id,
                name: name.to_string(),
                created_at: Utc::now(),
                notes: Vec::new(),
            },
        );
        id
    }

    /// Swap a temporary board for the server's copy
    pub fn confirm_board(&mut self, temporary: ClientId, board: Board) -> bool {
        let persisted = ClientId::Persisted(board.id);
        let Some(local) = self.board_mut(temporary) else {
            return false;
        };

        local.id = persisted;
        local.name = board.name;
        local.created_at = board.created_at;
        for note in &mut local.notes {
            note.board_id = persisted;
        }

        if let Some(dragged) = self.dragged.as_mut() {
            if dragged.board_id == temporary {
                dragged.board_id = persisted;
            }
        }
        true
    }

    /// Drop a board whose creation failed
    pub fn discard_board(&mut self, temporary: ClientId) -> Option<ClientBoard> {
        let index = self.boards.iter().position(|board| board.id == temporary)?;
        Some(self.boards.remove(index))
    }

    /// Rename a board, returning the previous name for rollback
    pub fn rename_board(&mut self, id: ClientId, name: &str) -> Option<String> {
        let board = self.board_mut(id)?;
        Some(std::mem::replace(&mut board.name, name.to_string()))
    }

    /// Take a board out, returning its index and contents for rollback
    pub fn remove_board(&mut self, id: ClientId) -> Option<(usize, ClientBoard)> {
        let index = self.boards.iter().position(|board| board.id == id)?;
        let board = self.boards.remove(index);

        if self
            .dragged
            .as_ref()
            .is_some_and(|dragged| dragged.board_id == id)
        {
            self.dragged = None;
        }

        Some((index, board))
    }

    /// Put back a board removed by `remove_board`
    pub fn restore_board(&mut self, index: usize, board: ClientBoard) {
        if self.board(board.id).is_some() {
            return;
        }
        let index = index.min(self.boards.len());
        self.boards.insert(index, board);
    }

    /// Add a note that exists only locally at the top of a board
    pub fn add_note_optimistic(&mut self, board_id: ClientId, content: &str) -> Option<ClientId> {
        let board = self.board_mut(board_id)?;
        let id = ClientId::temporary();
        board.notes.insert(
            0,
            ClientNote {
                id,
                content: content.to_string(),
                board_id,
                created_at: Utc::now(),
            },
        );
        Some(id)
    }

    /// Swap a temporary note for the server's copy
    ///
    /// The note stays on whichever board it sits on locally; returns that
    /// board so the caller can tell whether it was dragged elsewhere while
    /// the create was in flight.
    pub fn confirm_note(&mut self, temporary: ClientId, note: Note) -> Option<ClientId> {
        let persisted = ClientId::Persisted(note.id);
        let local = self.note_mut(temporary)?;

        local.id = persisted;
        local.content = note.content;
        local.created_at = note.created_at;
        let board_id = local.board_id;

        if let Some(dragged) = self.dragged.as_mut() {
            if dragged.id == temporary {
                dragged.id = persisted;
            }
        }
        Some(board_id)
    }

    /// Drop a note whose creation failed
    pub fn discard_note(&mut self, temporary: ClientId) -> Option<ClientNote> {
        let (_, note) = self.remove_note(temporary)?;
        Some(note)
    }

    /// Replace a note's content, returning the previous content for rollback
    pub fn edit_note(&mut self, id: ClientId, content: &str) -> Option<String> {
        let note = self.note_mut(id)?;
        Some(std::mem::replace(&mut note.content, content.to_string()))
    }

    /// Take a note out, returning where it was for rollback
    pub fn remove_note(&mut self, id: ClientId) -> Option<(NotePosition, ClientNote)> {
        let position = self.note_position(id)?;
        let board = self.board_mut(position.board_id)?;
        let note = board.notes.remove(position.index);

        if self.dragged.as_ref().is_some_and(|dragged| dragged.id == id) {
            self.dragged = None;
        }

        Some((position, note))
    }

    /// Put back a note removed by `remove_note`
    pub fn restore_note(&mut self, position: NotePosition, mut note: ClientNote) -> bool {
        if self.note(note.id).is_some() {
            return false;
        }
        let Some(board) = self.board_mut(position.board_id) else {
            return false;
        };
        note.board_id = position.board_id;
        let index = position.index.min(board.notes.len());
        board.notes.insert(index, note);
        true
    }

    /// Move a note to the end of another board
    ///
    /// Returns the note's previous position, or `None` when the note or the
    /// target board is unknown or the note is already on that board.
    pub fn relocate_note(&mut self, id: ClientId, target: ClientId) -> Option<NotePosition> {
        let position = self.note_position(id)?;
        if position.board_id == target || self.board(target).is_none() {
            return None;
        }

        let mut note = self.board_mut(position.board_id)?.notes.remove(position.index);
        note.board_id = target;
        self.board_mut(target)?.notes.push(note);

        if let Some(dragged) = self.dragged.as_mut() {
            if dragged.id == id {
                dragged.board_id = target;
            }
        }
        Some(position)
    }

    /// Move a note back to where `relocate_note` took it from
    pub fn return_note(&mut self, id: ClientId, previous: NotePosition) -> bool {
        let Some((_, note)) = self.remove_note(id) else {
            return false;
        };
        self.restore_note(previous, note)
    }

    /// Reorder within one board: `active` takes the index `over` occupied
    ///
    /// Both notes must sit on `board_id`. Local only.
    pub fn reorder_note(&mut self, board_id: ClientId, active: ClientId, over: ClientId) -> bool {
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        let from = board.notes.iter().position(|note| note.id == active);
        let to = board.notes.iter().position(|note| note.id == over);

        match (from, to) {
            (Some(from), Some(to)) if from != to => {
                let note = board.notes.remove(from);
                board.notes.insert(to, note);
                true
            }
            _ => false,
        }
    }

    /// Record a failure for display
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn board(id: i64, name: &str, note_ids: &[i64]) -> BoardWithNotes {
        BoardWithNotes {
            board: Board {
                id,
                name: name.to_string(),
                user_id: 1,
                created_at: Utc::now(),
            },
            notes: note_ids
                .iter()
                .map(|&note_id| Note {
                    id: note_id,
                    content: format!("note {}", note_id),
                    board_id: id,
                    created_at: Utc::now(),
                })
                .collect(),
        }
    }

    pub fn note_ids(state: &BoardState, board: i64) -> Vec<ClientId> {
        state
            .board(ClientId::Persisted(board))
            .map(|b| b.notes.iter().map(|n| n.id).collect())
            .unwrap_or_default()
    }

    pub fn p(id: i64) -> ClientId {
        ClientId::Persisted(id)
    }
}
