/**
 * Login Handshake
 *
 * `POST /api/user` completes the identity-provider handshake: the client
 * posts the asserted email, the server opens a session and answers 204
 * with the session cookie. A rejected assertion redirects back to the
 * login page, like the original provider flow did.
 */

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;

use crate::auth::sessions::SESSION_COOKIE;
use crate::server::state::AppState;

/// Identity assertion posted by the login page
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Complete the login handshake (POST /api/user)
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    // Minimal assertion check; real verification belongs to the provider.
    if !request.email.contains('@') {
        tracing::warn!("rejected login assertion");
        return Redirect::to("/login").into_response();
    }

    let sid = state.sessions.create(request.email.clone());
    tracing::info!("session opened for {}", request.email);

    let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, sid);
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cookie)],
    )
        .into_response()
}
