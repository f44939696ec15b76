//! Postit and line API integration tests: server-set `board_id`, the
//! `updated_at` asymmetry, and the parent-validation flag.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use boardz::{Document, ServerConfig};
use common::{create_board, login, server_for, state_with, test_state};

use std::sync::Arc;

use boardz::store::MemoryStore;

#[tokio::test]
async fn postit_board_id_comes_from_the_url() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "Sprint 1").await;

    // A client-supplied board_id is discarded in favor of the URL's.
    let response = server
        .post(&format!("/api/boards/{}/postits", board.id))
        .json(&json!({ "content": "note", "board_id": "evil" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let postit = response.json::<Document>();
    assert_eq!(postit.board_id(), Some(board.id.as_str()));

    let fetched = server
        .get(&format!("/api/boards/{}/postits/{}", board.id, postit.id))
        .await
        .json::<Document>();
    assert_eq!(fetched.board_id(), Some(board.id.as_str()));
}

#[tokio::test]
async fn postit_carries_updated_at_and_line_does_not() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "Sprint 1").await;

    let postit = server
        .post(&format!("/api/boards/{}/postits", board.id))
        .json(&json!({ "content": "note" }))
        .await
        .json::<Document>();
    assert!(postit.fields.contains_key("updated_at"));

    let line = server
        .post(&format!("/api/boards/{}/lines", board.id))
        .json(&json!({ "points": [[0, 0], [10, 10]] }))
        .await
        .json::<Document>();
    assert!(!line.fields.contains_key("updated_at"));
}

#[tokio::test]
async fn postit_update_refreshes_updated_at() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "Sprint 1").await;
    let postit = server
        .post(&format!("/api/boards/{}/postits", board.id))
        .json(&json!({ "content": "before" }))
        .await
        .json::<Document>();

    let updated = server
        .put(&format!("/api/boards/{}/postits/{}", board.id, postit.id))
        .json(&json!({ "content": "after" }))
        .await
        .json::<Document>();

    assert_eq!(updated.fields["content"], json!("after"));
    assert_ne!(updated.fields["updated_at"], postit.fields["updated_at"]);
}

#[tokio::test]
async fn line_update_does_not_grow_an_updated_at() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "Sprint 1").await;
    let line = server
        .post(&format!("/api/boards/{}/lines", board.id))
        .json(&json!({ "points": [[0, 0]] }))
        .await
        .json::<Document>();

    let updated = server
        .put(&format!("/api/boards/{}/lines/{}", board.id, line.id))
        .json(&json!({ "points": [[0, 0], [5, 5]] }))
        .await
        .json::<Document>();

    assert_eq!(updated.id, line.id);
    assert!(!updated.fields.contains_key("updated_at"));
}

#[tokio::test]
async fn child_updates_cannot_move_a_record_between_boards() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "home").await;
    let other = create_board(&server, "other").await;

    let postit = server
        .post(&format!("/api/boards/{}/postits", board.id))
        .json(&json!({ "content": "note" }))
        .await
        .json::<Document>();

    let updated = server
        .put(&format!("/api/boards/{}/postits/{}", board.id, postit.id))
        .json(&json!({ "board_id": other.id, "content": "moved?" }))
        .await
        .json::<Document>();

    assert_eq!(updated.board_id(), Some(board.id.as_str()));
}

#[tokio::test]
async fn listings_are_scoped_to_their_board() {
    let server = server_for(test_state());
    login(&server).await;

    let first = create_board(&server, "first").await;
    let second = create_board(&server, "second").await;

    server
        .post(&format!("/api/boards/{}/postits", first.id))
        .json(&json!({ "content": "mine" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post(&format!("/api/boards/{}/postits", second.id))
        .json(&json!({ "content": "other" }))
        .await
        .assert_status(StatusCode::CREATED);

    let postits = server
        .get(&format!("/api/boards/{}/postits", first.id))
        .await
        .json::<Vec<Document>>();
    assert_eq!(postits.len(), 1);
    assert_eq!(postits[0].fields["content"], json!("mine"));
}

#[tokio::test]
async fn child_loader_validates_its_own_parameter() {
    let server = server_for(test_state());
    login(&server).await;

    let board = create_board(&server, "Sprint 1").await;

    let response = server
        .get(&format!("/api/boards/{}/postits/abc", board.id))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get(&format!("/api/boards/{}/lines/{}", board.id, "b".repeat(24)))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn child_writes_trust_the_url_by_default() {
    let server = server_for(test_state());
    login(&server).await;

    // No such board exists; the observed behavior accepts the write anyway.
    let response = server
        .post(&format!("/api/boards/{}/postits", "c".repeat(24)))
        .json(&json!({ "content": "orphan" }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn parent_validation_flag_rejects_missing_boards() {
    let config = ServerConfig {
        validate_parent_board: true,
        ..ServerConfig::default()
    };
    let server = server_for(state_with(config, Arc::new(MemoryStore::new())));
    login(&server).await;

    let response = server
        .post(&format!("/api/boards/{}/postits", "c".repeat(24)))
        .json(&json!({ "content": "orphan" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Writes under an existing board still go through.
    let board = create_board(&server, "Sprint 1").await;
    let response = server
        .post(&format!("/api/boards/{}/postits", board.id))
        .json(&json!({ "content": "note" }))
        .await;
    response.assert_status(StatusCode::CREATED);
}
