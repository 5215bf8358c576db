//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the backend. These types are used for serialization
//! and communication over the REST API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All wire types serialize with camelCase
//! field names (`boardId`, `createdAt`, `userId`).

/// Authentication request and response bodies
pub mod auth;

/// Board types
pub mod board;

/// Note types
pub mod note;

/// Generic response bodies
pub mod api;

/// Shared error types and input validation
pub mod error;

/// Re-export commonly used types for convenience
pub use api::{ErrorResponse, MessageResponse};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use board::{Board, BoardNameRequest, BoardWithNotes};
pub use error::{validate_board_name, validate_note_content, SharedError};
pub use note::{MoveNoteRequest, Note, NoteContentRequest};
