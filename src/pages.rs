/**
 * Server-Rendered Pages
 *
 * Minimal HTML collaborators around the core pipeline: the index, the
 * login page and the board view. Page traffic uses redirects to `/login`
 * for unauthenticated viewers instead of the API gate's 403; both surfaces
 * share the same session store.
 */

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::boards::document::{Document, ResourceKind};
use crate::error::ApiError;
use crate::middleware::loader::Loaded;
use crate::server::state::AppState;

/// Index page (GET /)
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(session) = state.sessions.session_for(&headers) else {
        return Redirect::to("/login").into_response();
    };
    Html(render_index(&session.email)).into_response()
}

/// Login page (GET /login)
pub async fn login_page() -> Html<String> {
    Html(render_login())
}

/// Board page (GET /boards/{bid}, loader-guarded)
///
/// Embeds the board plus its postits and lines as serialized JSON for the
/// client script to pick up.
pub async fn board_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Loaded(board): Loaded,
) -> Result<Response, ApiError> {
    let Some(session) = state.sessions.session_for(&headers) else {
        return Ok(Redirect::to("/login").into_response());
    };

    let postits = state
        .store
        .find_by_board(ResourceKind::Postit, &board.id)
        .await?;
    let lines = state
        .store
        .find_by_board(ResourceKind::Line, &board.id)
        .await?;

    Ok(Html(render_board(&session.email, &board, &postits, &lines)?).into_response())
}

fn render_index(email: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>boardz</title></head>\n<body>\n\
         <h1>boardz</h1>\n<p>Signed in as {}</p>\n\
         <script src=\"/static/index.js\"></script>\n</body>\n</html>\n",
        email
    )
}

fn render_login() -> String {
    "<!DOCTYPE html>\n<html>\n<head><title>boardz - login</title></head>\n<body>\n\
     <h1>Sign in</h1>\n\
     <script src=\"/static/login.js\"></script>\n</body>\n</html>\n"
        .to_string()
}

fn render_board(
    email: &str,
    board: &Document,
    postits: &[Document],
    lines: &[Document],
) -> Result<String, ApiError> {
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>boardz</title></head>\n<body>\n\
         <p>Signed in as {}</p>\n<div id=\"board\"></div>\n<script>\n\
         var board = {};\nvar postits = {};\nvar lines = {};\n</script>\n\
         <script src=\"/static/board.js\"></script>\n</body>\n</html>\n",
        email,
        serde_json::to_string(board)?,
        serde_json::to_string(postits)?,
        serde_json::to_string(lines)?,
    ))
}
