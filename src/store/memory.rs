/**
 * In-Memory Resource Store
 *
 * The default backend when no database is configured, and the backend the
 * test suites run against. One ordered map per resource kind; object ids
 * start with a timestamp, so id order approximates creation order and
 * listings come out chronologically.
 */

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::boards::document::{Document, Fields, ResourceKind};
use crate::store::{ResourceStore, StoreError};

#[derive(Default)]
struct Collections {
    boards: BTreeMap<String, Document>,
    postits: BTreeMap<String, Document>,
    lines: BTreeMap<String, Document>,
}

impl Collections {
    fn collection(&self, kind: ResourceKind) -> &BTreeMap<String, Document> {
        match kind {
            ResourceKind::Board => &self.boards,
            ResourceKind::Postit => &self.postits,
            ResourceKind::Line => &self.lines,
        }
    }

    fn collection_mut(&mut self, kind: ResourceKind) -> &mut BTreeMap<String, Document> {
        match kind {
            ResourceKind::Board => &mut self.boards,
            ResourceKind::Postit => &mut self.postits,
            ResourceKind::Line => &mut self.lines,
        }
    }
}

/// In-memory store over per-kind ordered maps
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn insert(&self, kind: ResourceKind, document: Document) -> Result<Document, StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .collection_mut(kind)
            .insert(document.id.clone(), document.clone());
        Ok(document)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Document>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(document) = inner.collection_mut(kind).get_mut(id) else {
            return Ok(None);
        };
        for (key, value) in fields {
            document.fields.insert(key, value);
        }
        Ok(Some(document.clone()))
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.collection(kind).get(id).cloned())
    }

    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.collection(kind).values().cloned().collect())
    }

    async fn find_by_board(
        &self,
        kind: ResourceKind,
        board_id: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .collection(kind)
            .values()
            .filter(|document| document.board_id() == Some(board_id))
            .cloned()
            .collect())
    }
}
