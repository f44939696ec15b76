/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by middleware and handlers.
 * Loader- and validator-level failures short-circuit before any handler
 * logic runs; store faults in handlers propagate here rather than being
 * retried.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by the request pipeline
///
/// Each variant maps to a fixed HTTP status via [`ApiError::status_code`];
/// the `IntoResponse` implementation in `conversion` builds the body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed resource identifier in the request path
    #[error("bad request")]
    BadRequest,

    /// Well-formed identifier with no matching record
    #[error("not found: {context}")]
    NotFound {
        /// Short diagnostic context, e.g. `"wrong id"`
        context: &'static str,
    },

    /// No valid authenticated session
    ///
    /// Terminal for the request; the session gate destroys the session
    /// before producing this error.
    #[error("Forbidden")]
    Forbidden,

    /// Storage fault (transport or backend)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// JSON serialization fault
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Shorthand for a `NotFound` with the loader's standard context.
    pub fn wrong_id() -> Self {
        Self::NotFound {
            context: "wrong id",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Store(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the client
    ///
    /// Internal faults answer a generic message; the detail is logged, never
    /// sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Store(_) | Self::Serialization(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}
