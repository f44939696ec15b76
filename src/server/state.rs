/**
 * Application State
 *
 * Central state container shared by all handlers and middleware. Every
 * field is a cheap cloneable handle; the state itself is cloned per
 * request by axum.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need (for example, the push endpoint takes `State<ChangeBroadcast>`)
 * instead of the whole state.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::sessions::SessionStore;
use crate::realtime::broadcast::ChangeBroadcast;
use crate::server::config::ServerConfig;
use crate::store::ResourceStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Resource persistence backend
    pub store: Arc<dyn ResourceStore>,

    /// Server-side sessions
    pub sessions: SessionStore,

    /// Change hub; constructed once at startup, never a global
    pub changes: ChangeBroadcast,

    /// Behavior flags and bind configuration
    pub config: ServerConfig,
}

impl FromRef<AppState> for Arc<dyn ResourceStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for ChangeBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.changes.clone()
    }
}

impl FromRef<AppState> for ServerConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
