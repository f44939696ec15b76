//! Realtime Module
//!
//! Converts successful mutations into push notifications: a process-wide
//! broadcast hub plus the long-lived SSE endpoint that streams its events.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports
//! ├── broadcast.rs    - Change events and the publish helper
//! └── subscription.rs - SSE push-channel endpoint
//! ```
//!
//! # Fan-Out
//!
//! The hub is a `tokio::sync::broadcast` channel of [`ChangeEvent`] values.
//! The sender is constructed once at startup, carried in the application
//! state and handed to every mutation handler; each `/sse` connection holds
//! one receiver. Publishing never blocks on slow subscribers and never fails
//! the triggering request: a dropped receiver is pruned by the channel, a
//! lagging receiver skips ahead.
//!
//! Events from a single request arrive at any given subscriber in publish
//! order; no ordering is guaranteed across concurrently-publishing requests
//! beyond the happens-before of their store writes.

/// Change events and publishing
pub mod broadcast;

/// SSE push-channel endpoint
pub mod subscription;

pub use broadcast::{publish_change, ChangeAction, ChangeBroadcast, ChangeEvent};
pub use subscription::handle_push_channel;
