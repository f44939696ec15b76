//! Boards Module
//!
//! The resource model and HTTP handlers for boards, postits and lines.
//!
//! # Module Structure
//!
//! ```text
//! boards/
//! ├── mod.rs      - Module exports
//! ├── document.rs - Document model and resource kinds
//! ├── id.rs       - Object id generation and validation
//! └── handlers.rs - Create/Update/Get/List handlers
//! ```
//!
//! Records are schema-less: a fixed 24-character identifier plus an open map
//! of JSON fields. The handlers enforce the server-set-field rules (stripped
//! `_id`, URL-derived `board_id`, postit `updated_at`) and publish a change
//! event after every successful mutation.

/// Document model and resource kinds
pub mod document;

/// Object id generation and validation
pub mod id;

/// Resource handlers
pub mod handlers;

pub use document::{Document, Fields, ResourceKind};
