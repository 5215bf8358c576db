//! In-memory `BoardApi`
//!
//! Behaves like the REST server for a single user: ids count up from 1,
//! lists come back newest first and unknown ids are 404s. Clones share
//! the same server so a test can inspect what a worker thread did.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use noteboard::client::{BoardApi, ClientError};
use noteboard::shared::{
    AuthResponse, Board, BoardWithNotes, LoginRequest, Note, RegisterRequest, UserResponse,
};

/// The only token the fake accepts
pub const FAKE_TOKEN: &str = "fake-token";

#[derive(Default)]
struct FakeServer {
    next_id: i64,
    users: Vec<(UserResponse, String)>,
    boards: Vec<Board>,
    notes: Vec<Note>,
    /// Operations that fail once, by name
    failures: Vec<&'static str>,
    offline: bool,
    calls: Vec<&'static str>,
}

impl FakeServer {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn board_exists(&self, id: i64) -> bool {
        self.boards.iter().any(|board| board.id == id)
    }

    fn notes_of(&self, board_id: i64) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.board_id == board_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.id.cmp(&a.id));
        notes
    }
}

#[derive(Clone, Default)]
pub struct FakeApi {
    server: Arc<Mutex<FakeServer>>,
    token: Option<String>,
}

fn board_not_found() -> ClientError {
    ClientError::api(404, "Board not found or access denied")
}

fn note_not_found() -> ClientError {
    ClientError::api(404, "Note not found or access denied")
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client already holding the accepted token
    pub fn signed_in() -> Self {
        let mut api = Self::new();
        api.set_token(Some(FAKE_TOKEN.to_string()));
        api
    }

    /// Make the next call to `op` fail with a 500
    pub fn fail_next(&self, op: &'static str) {
        self.lock().failures.push(op);
    }

    /// Every call fails with a 503 while offline
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn add_user(&self, email: &str, password: &str) -> i64 {
        let mut server = self.lock();
        let id = server.id();
        let user = UserResponse {
            id,
            email: email.to_string(),
            name: None,
        };
        server.users.push((user, password.to_string()));
        id
    }

    pub fn seed_board(&self, name: &str) -> i64 {
        let mut server = self.lock();
        let id = server.id();
        server.boards.push(Board {
            id,
            name: name.to_string(),
            user_id: 1,
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_note(&self, board_id: i64, content: &str) -> i64 {
        let mut server = self.lock();
        let id = server.id();
        server.notes.push(Note {
            id,
            content: content.to_string(),
            board_id,
            created_at: Utc::now(),
        });
        id
    }

    /// Board ids on the server, newest first
    pub fn board_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.lock().boards.iter().map(|board| board.id).collect();
        ids.sort_by(|a, b| b.cmp(a));
        ids
    }

    pub fn board_name(&self, id: i64) -> Option<String> {
        self.lock()
            .boards
            .iter()
            .find(|board| board.id == id)
            .map(|board| board.name.clone())
    }

    /// Note ids on a server board, newest first
    pub fn note_ids(&self, board_id: i64) -> Vec<i64> {
        self.lock()
            .notes_of(board_id)
            .into_iter()
            .map(|note| note.id)
            .collect()
    }

    pub fn note_content(&self, id: i64) -> Option<String> {
        self.lock()
            .notes
            .iter()
            .find(|note| note.id == id)
            .map(|note| note.content.clone())
    }

    /// Names of the operations called so far
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeServer> {
        self.server.lock().expect("fake server lock")
    }

    fn call(&self, op: &'static str) -> Result<MutexGuard<'_, FakeServer>, ClientError> {
        let mut server = self.lock();
        server.calls.push(op);
        if server.offline {
            return Err(ClientError::api(503, "Service unavailable"));
        }
        if let Some(index) = server.failures.iter().position(|failure| *failure == op) {
            server.failures.remove(index);
            return Err(ClientError::api(500, "Internal server error"));
        }
        Ok(server)
    }

    fn protected(&self, op: &'static str) -> Result<MutexGuard<'_, FakeServer>, ClientError> {
        match self.token.as_deref() {
            None => Err(ClientError::NotAuthenticated),
            Some(FAKE_TOKEN) => self.call(op),
            Some(_) => Err(ClientError::api(401, "Invalid token")),
        }
    }

    fn auth_response(user: UserResponse) -> AuthResponse {
        AuthResponse {
            user,
            token: FAKE_TOKEN.to_string(),
        }
    }
}

impl BoardApi for FakeApi {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let mut server = self.call("register")?;
        if server.users.iter().any(|(user, _)| user.email == request.email) {
            return Err(ClientError::api(409, "Email already registered"));
        }
        let id = server.id();
        let user = UserResponse {
            id,
            email: request.email.clone(),
            name: request.name.clone(),
        };
        server.users.push((user.clone(), request.password.clone()));
        Ok(Self::auth_response(user))
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let server = self.call("login")?;
        let (user, password) = server
            .users
            .iter()
            .find(|(user, _)| user.email == request.email)
            .ok_or_else(|| ClientError::api(404, "User not found"))?;
        if *password != request.password {
            return Err(ClientError::api(401, "Incorrect password"));
        }
        Ok(Self::auth_response(user.clone()))
    }

    async fn me(&self) -> Result<UserResponse, ClientError> {
        let server = self.protected("me")?;
        Ok(server
            .users
            .first()
            .map(|(user, _)| user.clone())
            .unwrap_or(UserResponse {
                id: 1,
                email: "fake@example.com".to_string(),
                name: None,
            }))
    }

    async fn list_boards(&self) -> Result<Vec<Board>, ClientError> {
        let server = self.protected("list_boards")?;
        let mut boards = server.boards.clone();
        boards.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(boards)
    }

    async fn get_board(&self, id: i64) -> Result<BoardWithNotes, ClientError> {
        let server = self.protected("get_board")?;
        let board = server
            .boards
            .iter()
            .find(|board| board.id == id)
            .cloned()
            .ok_or_else(board_not_found)?;
        let notes = server.notes_of(id);
        Ok(BoardWithNotes { board, notes })
    }

    async fn create_board(&self, name: &str) -> Result<Board, ClientError> {
        let mut server = self.protected("create_board")?;
        let board = Board {
            id: server.id(),
            name: name.to_string(),
            user_id: 1,
            created_at: Utc::now(),
        };
        server.boards.push(board.clone());
        Ok(board)
    }

    async fn rename_board(&self, id: i64, name: &str) -> Result<Board, ClientError> {
        let mut server = self.protected("rename_board")?;
        let board = server
            .boards
            .iter_mut()
            .find(|board| board.id == id)
            .ok_or_else(board_not_found)?;
        board.name = name.to_string();
        Ok(board.clone())
    }

    async fn delete_board(&self, id: i64) -> Result<(), ClientError> {
        let mut server = self.protected("delete_board")?;
        if !server.board_exists(id) {
            return Err(board_not_found());
        }
        server.boards.retain(|board| board.id != id);
        server.notes.retain(|note| note.board_id != id);
        Ok(())
    }

    async fn list_notes(&self, board_id: i64) -> Result<Vec<Note>, ClientError> {
        let server = self.protected("list_notes")?;
        if !server.board_exists(board_id) {
            return Err(board_not_found());
        }
        Ok(server.notes_of(board_id))
    }

    async fn create_note(&self, board_id: i64, content: &str) -> Result<Note, ClientError> {
        let mut server = self.protected("create_note")?;
        if !server.board_exists(board_id) {
            return Err(board_not_found());
        }
        let note = Note {
            id: server.id(),
            content: content.to_string(),
            board_id,
            created_at: Utc::now(),
        };
        server.notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i64, content: &str) -> Result<Note, ClientError> {
        let mut server = self.protected("update_note")?;
        let note = server
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(note_not_found)?;
        note.content = content.to_string();
        Ok(note.clone())
    }

    async fn move_note(&self, id: i64, board_id: i64) -> Result<Note, ClientError> {
        let mut server = self.protected("move_note")?;
        if !server.board_exists(board_id) {
            return Err(board_not_found());
        }
        let note = server
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(note_not_found)?;
        note.board_id = board_id;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<(), ClientError> {
        let mut server = self.protected("delete_note")?;
        if !server.notes.iter().any(|note| note.id == id) {
            return Err(note_not_found());
        }
        server.notes.retain(|note| note.id != id);
        Ok(())
    }
}
