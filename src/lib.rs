//! Boardz Server
//!
//! A collaborative board server: authenticated users create boards containing
//! freeform notes ("postits") and freehand strokes ("lines"); every client
//! viewing a board sees mutations from other clients in near real time.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Application state, configuration, app construction
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Session gate and resource-loader middleware
//! - **`auth`** - Session store and the login handshake
//! - **`boards`** - Document model, object ids, resource handlers
//! - **`store`** - Storage seam with in-memory and Postgres backends
//! - **`realtime`** - Change broadcasting and the SSE push channel
//! - **`pages`** - Server-rendered HTML pages
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! request -> session gate -> resource loader (single-resource reads)
//!         -> handler -> store write -> change broadcast
//!         -> every open /sse subscriber receives the serialized event
//! ```
//!
//! # State Management
//!
//! All shared state lives in [`server::state::AppState`]: the resource store
//! behind an `Arc`, the session store behind a mutex, and a
//! `tokio::sync::broadcast` sender for change events. The broadcast sender is
//! constructed once at startup and handed to the route registrars and the
//! push endpoint; there is no global broadcast state.

/// Server setup, state and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Session gate and resource-loader middleware
pub mod middleware;

/// Session store and login handshake
pub mod auth;

/// Board/Postit/Line documents and handlers
pub mod boards;

/// Resource storage backends
pub mod store;

/// Change broadcasting and the push channel
pub mod realtime;

/// Server-rendered pages
pub mod pages;

/// Error types
pub mod error;

// Re-export commonly used types
pub use boards::document::{Document, Fields, ResourceKind};
pub use error::ApiError;
pub use realtime::{publish_change, ChangeAction, ChangeBroadcast, ChangeEvent};
pub use server::state::AppState;
pub use server::{create_app, ServerConfig};
pub use store::{MemoryStore, ResourceStore};
