/**
 * App Construction
 *
 * Builds the application state and the router. The change hub is created
 * here, once, and handed by value to the state; everything downstream
 * (route registrars, mutation handlers, the push endpoint) receives it
 * through `AppState`.
 */

use std::sync::Arc;

use axum::Router;
use tokio::sync::broadcast;

use crate::realtime::broadcast::ChangeEvent;
use crate::routes::router::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;
use crate::store::{MemoryStore, PgStore, ResourceStore};

/// Capacity of the change hub
///
/// Events are small envelopes; this bounds how far a slow push channel may
/// lag before it skips ahead.
const CHANGE_HUB_CAPACITY: usize = 1000;

/// Assemble the application state around a concrete store
///
/// Exposed separately from [`create_app`] so tests can build the state
/// over an in-memory (or instrumented) store.
pub fn build_state(config: ServerConfig, store: Arc<dyn ResourceStore>) -> AppState {
    let (changes, _) = broadcast::channel::<ChangeEvent>(CHANGE_HUB_CAPACITY);

    AppState {
        store,
        sessions: crate::auth::sessions::SessionStore::new(),
        changes,
        config,
    }
}

/// Create the Axum application
///
/// 1. Connect to Postgres if configured; otherwise run on the in-memory
///    store
/// 2. Build the shared state (store, sessions, change hub)
/// 3. Assemble the router
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing boardz server");

    let store: Arc<dyn ResourceStore> = match load_database().await {
        Some(pool) => Arc::new(PgStore::new(pool)),
        None => Arc::new(MemoryStore::new()),
    };

    let state = build_state(config, store);

    tracing::info!(
        "Router configured (push channel {}, parent validation {})",
        if state.config.open_push_channel {
            "open"
        } else {
            "session-gated"
        },
        if state.config.validate_parent_board {
            "on"
        } else {
            "off"
        }
    );

    create_router(state)
}
