/**
 * Router Configuration
 *
 * Assembles the full HTTP surface: pages, the login handshake, the
 * session-gated API, the push channel, static files and the 404 fallback.
 *
 * The push channel is open by default; with `open_push_channel` turned
 * off it runs behind the same session gate as the API.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth::handlers::login;
use crate::middleware::auth::require_session;
use crate::middleware::loader::load_board;
use crate::pages;
use crate::realtime::subscription::handle_push_channel;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    // The board page shares the board loader with the API but answers
    // unauthenticated viewers with a redirect, so it sits outside the gate.
    let board_page = Router::new()
        .route("/boards/{bid}", get(pages::board_page))
        .route_layer(from_fn_with_state(state.clone(), load_board));

    let push_channel = if state.config.open_push_channel {
        Router::new().route("/sse", get(handle_push_channel))
    } else {
        Router::new()
            .route("/sse", get(handle_push_channel))
            .route_layer(from_fn_with_state(state.clone(), require_session))
    };

    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page))
        .route("/api/user", post(login))
        .merge(board_page)
        .merge(configure_api_routes(state.clone()))
        .merge(push_channel)
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
