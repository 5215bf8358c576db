//! Desktop Client
//!
//! Everything the desktop app needs apart from the widgets themselves:
//!
//! - **`api`** - `BoardApi` trait and its `reqwest` implementation
//! - **`state`** - in-memory boards and notes, temporary ids
//! - **`dnd`** - drag-and-drop reconciler
//! - **`sync`** - optimistic commands, execution and rollback
//! - **`session`** - token persistence between runs
//! - **`worker`** - background thread running API calls for the UI
//!
//! The egui front end (`app`, `views`, `theme`) is only compiled with the
//! `desktop` feature.

pub mod api;
pub mod config;
pub mod dnd;
pub mod error;
pub mod session;
pub mod state;
pub mod sync;
pub mod worker;

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod theme;
#[cfg(feature = "desktop")]
pub mod views;

pub use api::{ApiClient, BoardApi};
pub use config::ClientConfig;
pub use dnd::{DragTarget, MoveIntent};
pub use error::ClientError;
pub use session::{Session, SessionStore};
pub use state::{BoardState, ClientBoard, ClientId, ClientNote, NotePosition};
pub use sync::{execute, fetch_snapshot, BoardSync, SyncCommand, SyncEvent};
pub use worker::{Worker, WorkerReply, WorkerRequest};
