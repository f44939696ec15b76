/**
 * API Resource Routes
 *
 * The session-gated `/api` surface for boards, postits and lines.
 *
 * Loader middleware guards the single-resource GET routes only; write
 * routes on the same paths run without a loader. Child writes trust the
 * board id from the URL unless `ServerConfig::validate_parent_board` is
 * set. The session gate is layered outermost, so it runs before any
 * loader.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, put},
    Router,
};

use crate::boards::handlers::{
    create_board, create_line, create_postit, get_board, get_line, get_postit, list_boards,
    list_lines, list_postits, update_board, update_line, update_postit,
};
use crate::middleware::auth::require_session;
use crate::middleware::loader::{load_board, load_line, load_postit};
use crate::server::state::AppState;

/// Build the session-gated API router
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    // Write and list routes; no loader runs here.
    let writes = Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route("/api/boards/{bid}", put(update_board))
        .route(
            "/api/boards/{bid}/postits",
            get(list_postits).post(create_postit),
        )
        .route("/api/boards/{bid}/postits/{pid}", put(update_postit))
        .route(
            "/api/boards/{bid}/lines",
            get(list_lines).post(create_line),
        )
        .route("/api/boards/{bid}/lines/{lid}", put(update_line));

    // Loader-guarded single-resource reads, one sub-router per loader.
    let board_reads = Router::new()
        .route("/api/boards/{bid}", get(get_board))
        .route_layer(from_fn_with_state(state.clone(), load_board));

    let postit_reads = Router::new()
        .route("/api/boards/{bid}/postits/{pid}", get(get_postit))
        .route_layer(from_fn_with_state(state.clone(), load_postit));

    let line_reads = Router::new()
        .route("/api/boards/{bid}/lines/{lid}", get(get_line))
        .route_layer(from_fn_with_state(state.clone(), load_line));

    writes
        .merge(board_reads)
        .merge(postit_reads)
        .merge(line_reads)
        .route_layer(from_fn_with_state(state, require_session))
}
