//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Router assembly, health check, fallback, layers
//! ├── api_routes.rs   - Public and protected API routes
//! └── params.rs       - Path id parsing
//! ```

pub mod api_routes;
pub mod params;
pub mod router;

pub use router::create_router;
