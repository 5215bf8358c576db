//! Server Module
//!
//! Server configuration, application state and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and the SQLite pool
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: `open_pool` connects and migrates
//! 3. **State Creation**: pool, token service and bcrypt cost
//! 4. **Router Creation**: routes, auth middleware, CORS, tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{memory_pool, open_pool, ServerConfig, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
pub use init::create_app;
pub use state::AppState;
