//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and stores and can be converted to
//! HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse` from Axum, allowing it to be
//! returned directly from handlers and middleware. The error is converted to
//! an appropriate status code and a JSON body:
//!
//! ```json
//! { "message": "Board not found", "status": 404 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
