//! Error Module
//!
//! Defines the error taxonomy used by handlers and middleware and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `BadRequest` - malformed resource identifier (400)
//! - `NotFound` - well-formed identifier, no matching record (404)
//! - `Forbidden` - no valid session; the gate has already destroyed it (403)
//! - `Store` / `Serialization` - internal faults (500, detail logged only)
//!
//! All errors implement `IntoResponse`, so handlers return
//! `Result<_, ApiError>` and errors convert centrally; no handler builds its
//! own error responses.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
