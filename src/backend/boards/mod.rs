//! Boards Module
//!
//! Named boards owned by a single user.
//!
//! - **`db`** - Board store, every query scoped to the owning user
//! - **`handlers`** - `/api/boards` endpoints

pub mod db;
pub mod handlers;

pub use handlers::{create_board, delete_board, get_board, list_boards, update_board};
