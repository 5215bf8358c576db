//! Notes Module
//!
//! Free-text notes living on boards. A note belongs to a user only through
//! its board.
//!
//! - **`db`** - Note store and the ownership checks handlers rely on
//! - **`handlers`** - `/api/boards/{id}/notes` and `/api/notes` endpoints

pub mod db;
pub mod handlers;

pub use handlers::{create_note, delete_note, get_note, list_notes, move_note, update_note};
