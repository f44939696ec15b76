//! Routes Module
//!
//! Router assembly for the whole HTTP surface.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Top-level router (pages, login, /sse, static, 404)
//! └── api_routes.rs - Session-gated /api resource routes
//! ```
//!
//! # Route Order
//!
//! 1. Pages (`/`, `/login`, `/boards/{bid}`) and the login handshake
//! 2. The session-gated API routes
//! 3. The `/sse` push channel (gated or open, per configuration)
//! 4. Static files under `/static`
//! 5. A 404 fallback

/// Top-level router
pub mod router;

/// API resource routes
pub mod api_routes;

pub use router::create_router;
