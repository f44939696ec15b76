/**
 * Resource Loaders
 *
 * Middleware that validates a path identifier and loads the addressed
 * record before the handler runs. One loader per resource kind, each bound
 * to its path-parameter name (`bid`/`pid`/`lid`).
 *
 * Per request:
 * 1. the named path parameter is validated syntactically; a malformed id
 *    fails with `BadRequest` and the store is never touched,
 * 2. the record is looked up; a store fault propagates as an internal
 *    error,
 * 3. a missing record fails with `NotFound` ("wrong id"),
 * 4. the loaded record is attached to the request extensions, where the
 *    [`Loaded`] extractor picks it up.
 *
 * Loaders never check authorization; that is the session gate's job.
 */

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::boards::document::{Document, ResourceKind};
use crate::boards::id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// The record attached to a request by a resource loader
#[derive(Clone, Debug)]
pub struct LoadedResource {
    pub kind: ResourceKind,
    pub document: Document,
}

/// Extractor for the loader-attached record
///
/// Usable in any handler behind a loader:
///
/// ```ignore
/// async fn get_board(Loaded(board): Loaded) -> Json<Document> { Json(board) }
/// ```
#[derive(Clone, Debug)]
pub struct Loaded(pub Document);

impl axum::extract::FromRequestParts<AppState> for Loaded {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let loaded = parts
            .extensions
            .get::<LoadedResource>()
            .cloned()
            .ok_or(ApiError::wrong_id())?;
        Ok(Loaded(loaded.document))
    }
}

/// Board loader: validates and loads `{bid}`
pub async fn load_board(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    load_resource(&state, ResourceKind::Board, "bid", &params, request, next).await
}

/// Postit loader: validates and loads `{pid}`
pub async fn load_postit(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    load_resource(&state, ResourceKind::Postit, "pid", &params, request, next).await
}

/// Line loader: validates and loads `{lid}`
pub async fn load_line(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    load_resource(&state, ResourceKind::Line, "lid", &params, request, next).await
}

async fn load_resource(
    state: &AppState,
    kind: ResourceKind,
    param: &'static str,
    params: &HashMap<String, String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw = params.get(param).ok_or(ApiError::BadRequest)?;

    if !id::is_valid(raw) {
        tracing::debug!("rejected malformed {} id {:?}", kind, raw);
        return Err(ApiError::BadRequest);
    }

    let document = state
        .store
        .find_by_id(kind, raw)
        .await?
        .ok_or(ApiError::wrong_id())?;

    request
        .extensions_mut()
        .insert(LoadedResource { kind, document });

    Ok(next.run(request).await)
}
