/**
 * Document Model
 *
 * Boards, postits and lines share one representation: a fixed identifier
 * plus an open, order-irrelevant map of JSON fields. Clients may send
 * arbitrary fields; the handlers overwrite the server-owned ones
 * (`board_id`, timestamps) and strip identifier fields from mutation bodies.
 */

use serde::{Deserialize, Serialize};

/// Open field map of a record, beyond its identifier
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// The resource kinds the pipeline knows about
///
/// The serialized name (`"Board"`, `"Postit"`, `"Line"`) doubles as the
/// `type` tag of broadcast envelopes and as the kind discriminator in the
/// Postgres backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Board,
    Postit,
    Line,
}

impl ResourceKind {
    /// Stable name of the kind, as used in broadcast envelopes
    pub fn name(&self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Postit => "Postit",
            Self::Line => "Line",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored record: identifier plus open field map
///
/// Serializes to a flat JSON object with the identifier under `_id`, which
/// is the wire shape clients and the push channel see:
///
/// ```json
/// { "_id": "64a1f0c2...", "title": "Sprint 1", "created_at": "..." }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// System-generated 24-character identifier, immutable once assigned
    #[serde(rename = "_id")]
    pub id: String,

    /// All other fields of the record
    #[serde(flatten)]
    pub fields: Fields,
}

impl Document {
    pub fn new(id: String, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// The `board_id` field, if this record is a child of a board
    pub fn board_id(&self) -> Option<&str> {
        self.fields.get("board_id").and_then(|v| v.as_str())
    }
}
