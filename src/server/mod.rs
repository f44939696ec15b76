//! Server Module
//!
//! Application state, configuration loading and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration, database loading
//! └── init.rs   - App construction
//! ```
//!
//! # Initialization Flow
//!
//! 1. Load configuration from the environment
//! 2. Connect to Postgres if configured, falling back to the in-memory
//!    store otherwise
//! 3. Construct the session store and the change hub
//! 4. Assemble the router

/// Application state
pub mod state;

/// Configuration loading
pub mod config;

/// App construction
pub mod init;

pub use config::ServerConfig;
pub use init::{build_state, create_app};
pub use state::AppState;
