//! Middleware Module
//!
//! Request-processing middleware that runs before handlers:
//!
//! - **`auth`** - the session gate separating anonymous from authenticated
//!   traffic
//! - **`loader`** - per-kind resource loaders that validate a path id and
//!   attach the loaded record to the request
//!
//! The gate and the loaders are intentionally independent: loaders never
//! check authorization, so the same loader guards both session-gated API
//! routes and the redirect-styled page routes.

/// Session gate
pub mod auth;

/// Resource loaders
pub mod loader;

pub use auth::{require_session, CurrentUser};
pub use loader::{load_board, load_line, load_postit, Loaded};
