//! Auth Module
//!
//! Server-side sessions and the login handshake. The core pipeline only
//! asks two things of this module: "does this request carry a valid
//! session?" and, for display, "which email does it belong to". Identity
//! verification itself is an external concern; the handshake accepts an
//! asserted email the way the original provider handed one over.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── sessions.rs - Session store and cookie helpers
//! └── handlers.rs - POST /api/user handshake
//! ```

/// Session store and cookie helpers
pub mod sessions;

/// Login handshake handler
pub mod handlers;

pub use sessions::{Session, SessionStore, SESSION_COOKIE};
