//! Storage Module
//!
//! The persistence seam of the pipeline. Handlers and middleware only ever
//! see the [`ResourceStore`] trait; the concrete backend is chosen at
//! startup.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - ResourceStore trait and StoreError
//! ├── memory.rs   - In-memory backend (default, and used by tests)
//! └── postgres.rs - Postgres backend (sqlx, JSONB documents)
//! ```
//!
//! # Semantics
//!
//! Updates are shallow field merges: fields present in the update overwrite
//! the stored ones, everything else is kept. Both backends implement the
//! same semantics, and neither verifies cross-record references; the parent
//! check on child writes is a pipeline concern.

use async_trait::async_trait;
use thiserror::Error;

use crate::boards::document::{Document, Fields, ResourceKind};

/// In-memory backend
pub mod memory;

/// Postgres backend
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage faults
///
/// Propagated to the client as a generic internal error; the detail is
/// logged only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the pipeline needs
///
/// Object-safe so it can be carried as `Arc<dyn ResourceStore>` in the
/// application state and swapped for instrumented stores in tests.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Persist a new record
    async fn insert(&self, kind: ResourceKind, document: Document) -> Result<Document, StoreError>;

    /// Merge `fields` into the record with the given id
    ///
    /// Returns the updated record, or `None` if no record matches. The
    /// identifier is never changed.
    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Document>, StoreError>;

    /// Fetch a record by id
    async fn find_by_id(&self, kind: ResourceKind, id: &str)
        -> Result<Option<Document>, StoreError>;

    /// List all records of a kind, in creation order
    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError>;

    /// List the records of a kind belonging to a board, in creation order
    async fn find_by_board(
        &self,
        kind: ResourceKind,
        board_id: &str,
    ) -> Result<Vec<Document>, StoreError>;
}
