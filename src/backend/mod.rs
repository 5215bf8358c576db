//! Backend Module
//!
//! This module contains all server-side code: an axum REST API over SQLite
//! for users, boards and notes.
//!
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly and route tables
//! - **`middleware`** - Ownership guard (bearer token → user)
//! - **`auth`** - Credential store, password hashing, token service, auth handlers
//! - **`boards`** - Board store and handlers
//! - **`notes`** - Note store and handlers
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `noteboard-server` binary
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── middleware/     - Auth middleware
//! ├── auth/           - Authentication
//! ├── boards/         - Boards
//! ├── notes/          - Notes
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A protected request passes the auth middleware, which attaches the
//! resolved user. The handler parses path ids, validates the body, checks
//! ownership and only then touches the store. Rows owned by other users
//! are reported as 404.
//!
//! # Example
//!
//! ```rust,no_run
//! use noteboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Boards
pub mod boards;

/// Notes
pub mod notes;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
