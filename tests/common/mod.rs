//! Shared test helpers
//!
//! Builds the real router over the in-memory store and drives it with a
//! cookie-saving test server, so the session handshake works exactly as in
//! production.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use serde_json::json;

use boardz::boards::document::{Document, Fields, ResourceKind};
use boardz::routes::create_router;
use boardz::server::build_state;
use boardz::store::{MemoryStore, ResourceStore, StoreError};
use boardz::{AppState, ServerConfig};

/// Application state over a fresh in-memory store
pub fn test_state() -> AppState {
    state_with(ServerConfig::default(), Arc::new(MemoryStore::new()))
}

pub fn state_with(config: ServerConfig, store: Arc<dyn ResourceStore>) -> AppState {
    build_state(config, store)
}

/// Cookie-saving test server over the real router
pub fn server_for(state: AppState) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(create_router(state), config)
        .expect("failed to build test server")
}

/// Complete the login handshake; the session cookie is saved on the server
pub async fn login(server: &TestServer) {
    let response = server
        .post("/api/user")
        .json(&json!({ "email": "user@example.com" }))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);
}

/// Create a board and return the persisted record
pub async fn create_board(server: &TestServer, title: &str) -> Document {
    let response = server
        .post("/api/boards")
        .json(&json!({ "title": title }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Document>()
}

/// Store wrapper counting id lookups
///
/// Lets tests assert that a rejected identifier never reaches the store.
pub struct CountingStore {
    inner: MemoryStore,
    lookups: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceStore for CountingStore {
    async fn insert(&self, kind: ResourceKind, document: Document) -> Result<Document, StoreError> {
        self.inner.insert(kind, document).await
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Document>, StoreError> {
        self.inner.update(kind, id, fields).await
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(kind, id).await
    }

    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError> {
        self.inner.find_all(kind).await
    }

    async fn find_by_board(
        &self,
        kind: ResourceKind,
        board_id: &str,
    ) -> Result<Vec<Document>, StoreError> {
        self.inner.find_by_board(kind, board_id).await
    }
}
