/**
 * Postgres Resource Store
 *
 * Persists all three resource kinds in one `documents` table: the open
 * field map as JSONB, the identifier and kind as the primary key and a
 * mirrored `board_id` column for child listings. Merge updates use the
 * JSONB concatenation operator, which has the same shallow-merge semantics
 * as the in-memory backend.
 *
 * The schema lives in `migrations/` and is applied at startup.
 */

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::boards::document::{Document, Fields, ResourceKind};
use crate::store::{ResourceStore, StoreError};

/// Postgres-backed store over a connection pool
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn document_from_body(id: String, body: Value) -> Document {
    let fields = match body {
        Value::Object(map) => map,
        // The body column only ever holds objects; tolerate anything else.
        other => {
            let mut map = Fields::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    Document::new(id, fields)
}

#[async_trait]
impl ResourceStore for PgStore {
    async fn insert(&self, kind: ResourceKind, document: Document) -> Result<Document, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (kind, id, board_id, body)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(kind.name())
        .bind(&document.id)
        .bind(document.board_id())
        .bind(Value::Object(document.fields.clone()))
        .execute(&self.pool)
        .await?;

        Ok(document)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        fields: Fields,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3::jsonb
            WHERE kind = $1 AND id = $2
            RETURNING body
            "#,
        )
        .bind(kind.name())
        .bind(id)
        .bind(Value::Object(fields))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| document_from_body(id.to_string(), row.get("body"))))
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, body FROM documents
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(kind.name())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| document_from_body(row.get("id"), row.get("body"))))
    }

    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, body FROM documents
            WHERE kind = $1
            ORDER BY id
            "#,
        )
        .bind(kind.name())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| document_from_body(row.get("id"), row.get("body")))
            .collect())
    }

    async fn find_by_board(
        &self,
        kind: ResourceKind,
        board_id: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, body FROM documents
            WHERE kind = $1 AND board_id = $2
            ORDER BY id
            "#,
        )
        .bind(kind.name())
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| document_from_body(row.get("id"), row.get("body")))
            .collect())
    }
}
