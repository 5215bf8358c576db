//! Noteboard - Main Library
//!
//! Noteboard is a personal note board: users sign up, create boards and fill
//! them with short text notes that can be dragged between boards.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation used by both sides
//!   - Users, boards, notes, request/response bodies
//!   - `SharedError` and the blank-input checks
//!
//! - **`backend`** - REST server (only compiled with the `server` feature)
//!   - Axum router over SQLite via sqlx
//!   - bcrypt passwords, HS256 bearer tokens
//!   - Ownership checks on every board and note route
//!
//! - **`client`** - Desktop client
//!   - `reqwest` API client behind the `BoardApi` trait
//!   - Optimistic state, drag-and-drop reconciler, refetch-on-failure sync
//!   - egui front end (only compiled with the `desktop` feature)
//!
//! # Feature Flags
//!
//! - **`server`** (default) - backend modules and the `noteboard-server` binary
//! - **`desktop`** - egui views and the `noteboard-desktop` binary
//!
//! # Usage
//!
//! ## Server
//!
//! ```rust,no_run
//! # #[cfg(feature = "server")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use noteboard::backend::server::{create_app, ServerConfig};
//!
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), noteboard::client::ClientError> {
//! use noteboard::client::{ApiClient, BoardApi, BoardSync, ClientConfig};
//! use noteboard::shared::LoginRequest;
//!
//! let mut sync = BoardSync::new(ApiClient::new(ClientConfig::new()));
//! let auth = sync
//!     .api()
//!     .login(&LoginRequest {
//!         email: "ada@example.com".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//! sync.api_mut().set_token(Some(auth.token));
//! sync.refresh().await?;
//! sync.create_board("Groceries").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Server**: handlers share `AppState` (pool plus `Arc<TokenService>`)
//! - **Desktop**: egui runs on the main thread; network calls run on a
//!   worker thread and come back over a channel

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// Desktop client
pub mod client;
