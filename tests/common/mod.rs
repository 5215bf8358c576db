//! Common test utilities and helpers
//!
//! - `database` - app and state over an in-memory SQLite database
//! - `auth_helpers` - request helpers, registering users and getting tokens
//! - `fake_api` - in-memory `BoardApi` with failure injection

#![allow(dead_code)]

#[cfg(feature = "server")]
pub mod auth_helpers;
#[cfg(feature = "server")]
pub mod database;
pub mod fake_api;
