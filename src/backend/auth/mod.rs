//! Authentication Module
//!
//! This module handles registration, login and the identity tokens that
//! authorize every other API call.
//!
//! # Architecture
//!
//! - **`users`** - Credential store (user rows and queries)
//! - **`passwords`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - Token service (JWT issue and verify)
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - Token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted) before storage
//! - Tokens are stateless and never expire
//! - Login distinguishes unknown email (404) from wrong password (401)

/// User model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// Token service
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::User;
