//! Collaboration grants and the access they confer.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_collaborator_can_read_and_edit_but_not_delete() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;
    let (bob, _) = app.login("bob").await;

    let note_id = app.create_note(&alice, "shared").await;
    let path = format!("/api/notes/{}", note_id);

    let response = app
        .request(
            "POST",
            "/api/collaborations",
            Some(json!({ "note_id": note_id, "user_id": bob_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "shared, edited", "body": "by bob", "tags": [] })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Deletion stays with the owner.
    let response = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_shared_note_appears_in_collaborator_listing() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;
    let (bob, _) = app.login("bob").await;

    let note_id = app.create_note(&alice, "shared").await;

    let response = app.request("GET", "/api/notes", None, Some(&bob)).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(0));

    app.request(
        "POST",
        "/api/collaborations",
        Some(json!({ "note_id": note_id, "user_id": bob_id })),
        Some(&alice),
    )
    .await;

    let response = app.request("GET", "/api/notes", None, Some(&bob)).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_revoked_collaborator_loses_access() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;
    let (bob, _) = app.login("bob").await;

    let note_id = app.create_note(&alice, "shared").await;
    let grant = json!({ "note_id": note_id, "user_id": bob_id });

    app.request("POST", "/api/collaborations", Some(grant.clone()), Some(&alice))
        .await;

    let path = format!("/api/notes/{}", note_id);
    let response = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", "/api/collaborations", Some(grant), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_only_the_owner_manages_collaborators() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;
    let (bob, _) = app.login("bob").await;
    let carol_id = app.register("carol").await;

    let note_id = app.create_note(&alice, "private").await;

    // Bob cannot grant himself or anyone else access to Alice's note.
    let response = app
        .request(
            "POST",
            "/api/collaborations",
            Some(json!({ "note_id": note_id, "user_id": carol_id })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/collaborations",
            Some(json!({ "note_id": note_id, "user_id": bob_id })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_granting_to_unknown_user_is_not_found() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;

    let note_id = app.create_note(&alice, "note").await;

    let response = app
        .request(
            "POST",
            "/api/collaborations",
            Some(json!({ "note_id": note_id, "user_id": Uuid::new_v4() })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_granting_on_missing_note_is_not_found() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;

    let response = app
        .request(
            "POST",
            "/api/collaborations",
            Some(json!({ "note_id": Uuid::new_v4(), "user_id": bob_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_grant_is_idempotent() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;

    let note_id = app.create_note(&alice, "shared").await;
    let grant = json!({ "note_id": note_id, "user_id": bob_id });

    let first = app
        .request("POST", "/api/collaborations", Some(grant.clone()), Some(&alice))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/collaborations", Some(grant), Some(&alice))
        .await;
    assert_eq!(second.status, StatusCode::CREATED);

    // The same grant survives; adding again returns its identifier.
    assert_eq!(
        first.body["data"]["collaboration_id"],
        second.body["data"]["collaboration_id"]
    );
}

#[tokio::test]
async fn test_concurrent_duplicate_grants_converge() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;

    let note_id = app.create_note(&alice, "shared").await;
    let grant = json!({ "note_id": note_id, "user_id": bob_id });

    let (first, second) = tokio::join!(
        app.request("POST", "/api/collaborations", Some(grant.clone()), Some(&alice)),
        app.request("POST", "/api/collaborations", Some(grant.clone()), Some(&alice)),
    );

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(
        first.body["data"]["collaboration_id"],
        second.body["data"]["collaboration_id"]
    );
}

#[tokio::test]
async fn test_revoking_a_grant_that_never_existed_fails() {
    let app = TestApp::new();
    let alice = app.register_and_login("alice").await;
    let bob_id = app.register("bob").await;

    let note_id = app.create_note(&alice, "note").await;

    let response = app
        .request(
            "DELETE",
            "/api/collaborations",
            Some(json!({ "note_id": note_id, "user_id": bob_id })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
