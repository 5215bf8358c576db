//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Current user info
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Get Me**: token → middleware resolves the user → user info returned

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
