//! Board Synchronizer
//!
//! Every user action goes through three steps:
//!
//! 1. `begin_*` applies the change to `BoardState` optimistically and
//!    returns the `SyncCommand` describing the server call.
//! 2. `execute` runs the command against a `BoardApi` and reports a
//!    `SyncEvent`. On failure it refetches the full state.
//! 3. `BoardState::apply` folds the event back into local state: confirmed
//!    entities replace temporary ones, a refetch replaces everything, and a
//!    failed refetch falls back to undoing just the failed command.
//!
//! Steps 1 and 3 are synchronous, so the desktop UI can run step 2 on a
//! worker thread. `BoardSync` chains all three for callers that own both
//! the state and the API.

use crate::client::api::BoardApi;
use crate::client::dnd::{DragTarget, MoveIntent};
use crate::client::error::ClientError;
use crate::client::state::{BoardState, ClientBoard, ClientId, ClientNote, NotePosition};
use crate::shared::{validate_board_name, validate_note_content, Board, BoardWithNotes, Note};

/// A server call plus what is needed to undo its optimistic change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    CreateBoard {
        temporary: ClientId,
        name: String,
    },
    RenameBoard {
        id: i64,
        name: String,
        previous: String,
    },
    DeleteBoard {
        id: i64,
        index: usize,
        removed: ClientBoard,
    },
    CreateNote {
        temporary: ClientId,
        board_id: i64,
        content: String,
    },
    EditNote {
        id: i64,
        content: String,
        previous: String,
    },
    DeleteNote {
        id: i64,
        position: NotePosition,
        removed: ClientNote,
    },
    MoveNote(MoveIntent),
}

/// Outcome of a command or refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    BoardCreated { temporary: ClientId, board: Board },
    BoardRenamed(Board),
    BoardDeleted(i64),
    NoteCreated { temporary: ClientId, note: Note },
    NoteEdited(Note),
    NoteMoved(Note),
    NoteDeleted(i64),
    /// Full snapshot from an explicit refresh
    Refreshed(Vec<BoardWithNotes>),
    /// The command failed and the refetch succeeded
    Recovered {
        error: String,
        snapshot: Vec<BoardWithNotes>,
    },
    /// The command failed and so did the refetch
    Failed { command: SyncCommand, error: String },
}

/// Fetch every board with its notes, boards newest first
pub async fn fetch_snapshot<A: BoardApi>(api: &A) -> Result<Vec<BoardWithNotes>, ClientError> {
    let boards = api.list_boards().await?;
    let mut snapshot = Vec::with_capacity(boards.len());

    for board in boards {
        let notes = api.list_notes(board.id).await?;
        snapshot.push(BoardWithNotes { board, notes });
    }

    Ok(snapshot)
}

/// Run one command against the API
pub async fn execute<A: BoardApi>(api: &A, command: SyncCommand) -> SyncEvent {
    let result = match &command {
        SyncCommand::CreateBoard { temporary, name } => {
            api.create_board(name)
                .await
                .map(|board| SyncEvent::BoardCreated {
                    temporary: *temporary,
                    board,
                })
        }
        SyncCommand::RenameBoard { id, name, .. } => {
            api.rename_board(*id, name).await.map(SyncEvent::BoardRenamed)
        }
        SyncCommand::DeleteBoard { id, .. } => {
            api.delete_board(*id).await.map(|()| SyncEvent::BoardDeleted(*id))
        }
        SyncCommand::CreateNote {
            temporary,
            board_id,
            content,
        } => api
            .create_note(*board_id, content)
            .await
            .map(|note| SyncEvent::NoteCreated {
                temporary: *temporary,
                note,
            }),
        SyncCommand::EditNote { id, content, .. } => {
            api.update_note(*id, content).await.map(SyncEvent::NoteEdited)
        }
        SyncCommand::DeleteNote { id, .. } => {
            api.delete_note(*id).await.map(|()| SyncEvent::NoteDeleted(*id))
        }
        SyncCommand::MoveNote(intent) => api
            .move_note(intent.note_id, intent.board_id)
            .await
            .map(SyncEvent::NoteMoved),
    };

    match result {
        Ok(event) => event,
        Err(error) => recover(api, command, error).await,
    }
}

async fn recover<A: BoardApi>(api: &A, command: SyncCommand, error: ClientError) -> SyncEvent {
    tracing::warn!("Sync command failed: {}; refetching", error);

    match fetch_snapshot(api).await {
        Ok(snapshot) => SyncEvent::Recovered {
            error: error.to_string(),
            snapshot,
        },
        Err(refetch_error) => {
            tracing::error!("Refetch after failure also failed: {}", refetch_error);
            SyncEvent::Failed {
                command,
                error: error.to_string(),
            }
        }
    }
}

impl BoardState {
    pub fn begin_create_board(&mut self, name: &str) -> Result<SyncCommand, ClientError> {
        validate_board_name(name)?;
        let temporary = self.add_board_optimistic(name);
        Ok(SyncCommand::CreateBoard {
            temporary,
            name: name.to_string(),
        })
    }

    pub fn begin_rename_board(&mut self, id: ClientId, name: &str) -> Result<SyncCommand, ClientError> {
        validate_board_name(name)?;
        let server_id = self.persisted_board(id)?;
        let previous = self
            .rename_board(id, name)
            .ok_or(ClientError::Missing("Board"))?;
        Ok(SyncCommand::RenameBoard {
            id: server_id,
            name: name.to_string(),
            previous,
        })
    }

    pub fn begin_delete_board(&mut self, id: ClientId) -> Result<SyncCommand, ClientError> {
        let server_id = self.persisted_board(id)?;
        let (index, removed) = self.remove_board(id).ok_or(ClientError::Missing("Board"))?;
        Ok(SyncCommand::DeleteBoard {
            id: server_id,
            index,
            removed,
        })
    }

    pub fn begin_create_note(&mut self, board_id: ClientId, content: &str) -> Result<SyncCommand, ClientError> {
        validate_note_content(content)?;
        let server_board = self.persisted_board(board_id)?;
        let temporary = self
            .add_note_optimistic(board_id, content)
            .ok_or(ClientError::Missing("Board"))?;
        Ok(SyncCommand::CreateNote {
            temporary,
            board_id: server_board,
            content: content.to_string(),
        })
    }

    pub fn begin_edit_note(&mut self, id: ClientId, content: &str) -> Result<SyncCommand, ClientError> {
        validate_note_content(content)?;
        let server_id = self.persisted_note(id)?;
        let previous = self.edit_note(id, content).ok_or(ClientError::Missing("Note"))?;
        Ok(SyncCommand::EditNote {
            id: server_id,
            content: content.to_string(),
            previous,
        })
    }

    pub fn begin_delete_note(&mut self, id: ClientId) -> Result<SyncCommand, ClientError> {
        let server_id = self.persisted_note(id)?;
        let (position, removed) = self.remove_note(id).ok_or(ClientError::Missing("Note"))?;
        Ok(SyncCommand::DeleteNote {
            id: server_id,
            position,
            removed,
        })
    }

    /// Reconciler drag-over, wrapped as a command when the server must know
    pub fn begin_drag_over(&mut self, target: DragTarget) -> Option<SyncCommand> {
        self.drag_over(target).map(SyncCommand::MoveNote)
    }

    fn persisted_board(&self, id: ClientId) -> Result<i64, ClientError> {
        self.board(id).ok_or(ClientError::Missing("Board"))?;
        id.persisted().ok_or(ClientError::NotPersisted("Board"))
    }

    fn persisted_note(&self, id: ClientId) -> Result<i64, ClientError> {
        self.note(id).ok_or(ClientError::Missing("Note"))?;
        id.persisted().ok_or(ClientError::NotPersisted("Note"))
    }

    /// Fold a sync event into local state
    ///
    /// Success events carry the server's answer and win over local state: a
    /// `Recovered` snapshot may predate commands that ran after it.
    ///
    /// Returns a follow-up command when a confirmed note turned out to sit
    /// on a different board than the server put it on (it was dragged
    /// while its creation was in flight).
    pub fn apply(&mut self, event: SyncEvent) -> Option<SyncCommand> {
        match event {
            SyncEvent::BoardCreated { temporary, board } => {
                if !self.confirm_board(temporary, board.clone())
                    && self.board(ClientId::Persisted(board.id)).is_none()
                {
                    self.boards.insert(
                        0,
                        ClientBoard::from(BoardWithNotes {
                            board,
                            notes: Vec::new(),
                        }),
                    );
                }
            }
            SyncEvent::BoardRenamed(board) => {
                if let Some(local) = self
                    .boards
                    .iter_mut()
                    .find(|b| b.id == ClientId::Persisted(board.id))
                {
                    local.name = board.name;
                }
            }
            SyncEvent::BoardDeleted(id) => {
                self.remove_board(ClientId::Persisted(id));
            }
            SyncEvent::NoteDeleted(id) => {
                self.remove_note(ClientId::Persisted(id));
            }
            SyncEvent::NoteCreated { temporary, note } => {
                let server_board = note.board_id;
                let note_id = note.id;
                let Some(local_board) = self.confirm_note(temporary, note.clone()) else {
                    self.insert_server_note(note);
                    return None;
                };
                if local_board != ClientId::Persisted(server_board) {
                    let target = local_board.persisted()?;
                    // The server lists the new note first on its board
                    return Some(SyncCommand::MoveNote(MoveIntent {
                        note_id,
                        board_id: target,
                        previous: NotePosition {
                            board_id: ClientId::Persisted(server_board),
                            index: 0,
                        },
                    }));
                }
            }
            SyncEvent::NoteEdited(note) => {
                if let Some(local) = self.note_mut(ClientId::Persisted(note.id)) {
                    local.content = note.content;
                }
            }
            SyncEvent::NoteMoved(note) => {
                let id = ClientId::Persisted(note.id);
                let target = ClientId::Persisted(note.board_id);
                if let Some(local) = self.note_mut(id) {
                    local.content = note.content;
                }
                if self.note(id).is_some_and(|local| local.board_id != target) {
                    self.relocate_note(id, target);
                }
            }
            SyncEvent::Refreshed(snapshot) => {
                self.replace_all(snapshot);
                self.clear_error();
            }
            SyncEvent::Recovered { error, snapshot } => {
                self.replace_all(snapshot);
                self.set_error(error);
            }
            SyncEvent::Failed { command, error } => {
                self.rollback(command);
                self.set_error(error);
                self.stale = true;
            }
        }
        None
    }

    /// Show a confirmed note the local state lost track of
    fn insert_server_note(&mut self, note: Note) {
        let id = ClientId::Persisted(note.id);
        if self.note(id).is_some() {
            return;
        }
        if let Some(board) = self.board_mut(ClientId::Persisted(note.board_id)) {
            board.notes.insert(0, ClientNote::from(note));
        }
    }

    /// Undo the optimistic change of a failed command
    fn rollback(&mut self, command: SyncCommand) {
        match command {
            SyncCommand::CreateBoard { temporary, .. } => {
                self.discard_board(temporary);
            }
            SyncCommand::RenameBoard { id, previous, .. } => {
                self.rename_board(ClientId::Persisted(id), &previous);
            }
            SyncCommand::DeleteBoard { index, removed, .. } => {
                self.restore_board(index, removed);
            }
            SyncCommand::CreateNote { temporary, .. } => {
                self.discard_note(temporary);
            }
            SyncCommand::EditNote { id, previous, .. } => {
                self.edit_note(ClientId::Persisted(id), &previous);
            }
            SyncCommand::DeleteNote {
                position, removed, ..
            } => {
                self.restore_note(position, removed);
            }
            SyncCommand::MoveNote(intent) => {
                self.return_note(ClientId::Persisted(intent.note_id), intent.previous);
            }
        }
    }
}

/// Local state bound to an API
pub struct BoardSync<A> {
    pub state: BoardState,
    api: A,
}

impl<A: BoardApi> BoardSync<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: BoardState::new(),
            api,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    /// Replace local state with the server's
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let snapshot = fetch_snapshot(&self.api).await?;
        self.state.apply(SyncEvent::Refreshed(snapshot));
        Ok(())
    }

    /// Execute a command and fold in its outcome, following up if needed
    pub async fn run(&mut self, command: SyncCommand) {
        let mut next = Some(command);
        while let Some(command) = next.take() {
            let event = execute(&self.api, command).await;
            next = self.state.apply(event);
        }
    }

    pub async fn create_board(&mut self, name: &str) -> Result<(), ClientError> {
        let command = self.state.begin_create_board(name)?;
        self.run(command).await;
        Ok(())
    }

    pub async fn rename_board(&mut self, id: ClientId, name: &str) -> Result<(), ClientError> {
        let command = self.state.begin_rename_board(id, name)?;
        self.run(command).await;
        Ok(())
    }

    pub async fn delete_board(&mut self, id: ClientId) -> Result<(), ClientError> {
        let command = self.state.begin_delete_board(id)?;
        self.run(command).await;
        Ok(())
    }

    pub async fn create_note(&mut self, board_id: ClientId, content: &str) -> Result<(), ClientError> {
        let command = self.state.begin_create_note(board_id, content)?;
        self.run(command).await;
        Ok(())
    }

    pub async fn edit_note(&mut self, id: ClientId, content: &str) -> Result<(), ClientError> {
        let command = self.state.begin_edit_note(id, content)?;
        self.run(command).await;
        Ok(())
    }

    pub async fn delete_note(&mut self, id: ClientId) -> Result<(), ClientError> {
        let command = self.state.begin_delete_note(id)?;
        self.run(command).await;
        Ok(())
    }

    pub fn drag_start(&mut self, note_id: ClientId) -> bool {
        self.state.drag_start(note_id)
    }

    /// Drag over a target, sending the move when the note changed boards
    pub async fn drag_over(&mut self, target: DragTarget) {
        if let Some(command) = self.state.begin_drag_over(target) {
            self.run(command).await;
        }
    }

    pub fn drag_end(&mut self, target: Option<DragTarget>) -> bool {
        self.state.drag_end(target)
    }

    pub fn drag_cancel(&mut self) {
        self.state.drag_cancel();
    }
}
