//! Note CRUD and the ownership boundary.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_owner_full_note_lifecycle() {
    let app = TestApp::new();
    let token = app.register_and_login("alice").await;

    let note_id = app.create_note(&token, "meeting notes").await;

    let response = app.request("GET", "/api/notes", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));

    let path = format!("/api/notes/{}", note_id);

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "meeting notes");

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "renamed", "body": "edited", "tags": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "renamed");

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stranger_is_forbidden_from_another_users_note() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    let note_id = app.create_note(&alice, "private").await;
    let path = format!("/api/notes/{}", note_id);

    let response = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "hijacked", "body": "", "tags": [] })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The note is untouched.
    let response = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "private");
}

#[tokio::test]
async fn test_missing_note_is_not_found_for_everyone() {
    let app = TestApp::new();
    let token = app.register_and_login("alice").await;

    // A nonexistent note reports missing, never a permission failure.
    let path = format!("/api/notes/{}", Uuid::new_v4());

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_note_listing_is_scoped_to_the_caller() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    app.create_note(&alice, "hers").await;
    app.create_note(&bob, "his first").await;
    app.create_note(&bob, "his second").await;

    let response = app.request("GET", "/api/notes", None, Some(&alice)).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));

    let response = app.request("GET", "/api/notes", None, Some(&bob)).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_note_with_empty_title_is_rejected() {
    let app = TestApp::new();
    let token = app.register_and_login("alice").await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": "", "body": "text", "tags": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tags_default_to_empty() {
    let app = TestApp::new();
    let token = app.register_and_login("alice").await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": "untagged", "body": "text" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["tags"].as_array().map(Vec::len), Some(0));
}
