/**
 * Session Gate
 *
 * Middleware protecting routes that require an authenticated session. The
 * check is terminal: a request without a valid session is answered 403
 * `Forbidden` and no further middleware or handler runs. Whatever session
 * the request's cookie references is destroyed first, so a
 * partially-established session cannot linger.
 */

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::session_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// The user attached to a request that passed the gate
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub email: String,
}

/// Session gate middleware
///
/// On success, attaches [`CurrentUser`] to the request extensions and
/// continues. On failure, destroys the referenced session and fails with
/// `Forbidden`.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(session) = state.sessions.session_for(request.headers()) {
        request.extensions_mut().insert(CurrentUser {
            email: session.email,
        });
        return Ok(next.run(request).await);
    }

    // Defensive cleanup: drop whatever the stale cookie points at.
    if let Some(sid) = session_id(request.headers()) {
        state.sessions.destroy(&sid);
    }

    tracing::warn!("unauthenticated request to a session-guarded route");
    Err(ApiError::Forbidden)
}

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(ApiError::Forbidden)
    }
}
