//! Drag-and-Drop Reconciler
//!
//! Turns pointer gestures into state changes and move intents.
//!
//! - Drag start captures the note into the dragged slot.
//! - Drag over a board other than the note's current one relocates the
//!   note to the end of that board immediately and yields a `MoveIntent`
//!   for the server. Hovering a note changes nothing.
//! - Drag end over another note on the same board reorders locally.
//! - Drag cancel clears the slot and leaves any relocation in place.

use crate::client::state::{BoardState, ClientId, NotePosition};

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Board(ClientId),
    Note(ClientId),
}

/// A relocation the server has to be told about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub note_id: i64,
    pub board_id: i64,
    /// Where the note was before the relocation, for rollback
    pub previous: NotePosition,
}

impl BoardState {
    /// Begin dragging a note; false when the note is unknown
    pub fn drag_start(&mut self, note_id: ClientId) -> bool {
        match self.note(note_id).cloned() {
            Some(note) => {
                self.dragged = Some(note);
                true
            }
            None => false,
        }
    }

    /// Pointer moved over a target while dragging
    ///
    /// Temporary notes are relocated locally only since the server does not
    /// know them yet. Temporary boards are not valid destinations.
    pub fn drag_over(&mut self, target: DragTarget) -> Option<MoveIntent> {
        let DragTarget::Board(board_id) = target else {
            return None;
        };
        let dragged = self.dragged.as_ref()?;
        if dragged.board_id == board_id || board_id.is_temporary() {
            return None;
        }

        let note_id = dragged.id;
        let previous = self.relocate_note(note_id, board_id)?;
        tracing::debug!("Relocated note {:?} to board {:?}", note_id, board_id);

        Some(MoveIntent {
            note_id: note_id.persisted()?,
            board_id: board_id.persisted()?,
            previous,
        })
    }

    /// Pointer released; returns whether a local reorder happened
    pub fn drag_end(&mut self, target: Option<DragTarget>) -> bool {
        let Some(dragged) = self.dragged.take() else {
            return false;
        };
        let Some(DragTarget::Note(over)) = target else {
            return false;
        };
        if over == dragged.id {
            return false;
        }

        let Some(over_board) = self.note(over).map(|note| note.board_id) else {
            return false;
        };
        let Some(active_board) = self.note(dragged.id).map(|note| note.board_id) else {
            return false;
        };
        if over_board != active_board {
            return false;
        }

        self.reorder_note(active_board, dragged.id, over)
    }

    /// Drag abandoned
    pub fn drag_cancel(&mut self) {
        self.dragged = None;
    }
}
