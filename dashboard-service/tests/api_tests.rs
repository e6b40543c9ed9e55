mod common;

use auth::Authority;
use auth::Principal;
use auth::TokenService;
use common::TestApp;
use common::TEST_SECRET;
use reqwest::StatusCode;
use serde_json::json;

/// Replace one character of the token's payload with a different base64url
/// character, leaving the structure intact so only the signature check can
/// catch it.
fn tamper(token: &str) -> String {
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let payload = &parts[1];
    let middle = payload.len() / 2;
    let original = payload.as_bytes()[middle] as char;
    let replacement = if original == 'A' { 'B' } else { 'A' };
    let mut chars: Vec<char> = payload.chars().collect();
    chars[middle] = replacement;
    parts[1] = chars.into_iter().collect();
    parts.join(".")
}

#[tokio::test]
async fn test_register_and_authenticate() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "secret", &["USER"]).await;

    let token = app.login("alice", "secret").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "secret", &["USER"]).await;

    let response = app
        .post("/users")
        .json(&json!({
            "username": "alice",
            "password": "other_password",
            "authorities": ["ADMIN"],
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "secret", &["USER"]).await;

    let wrong_password = app
        .post("/authenticate")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user = app
        .post("/authenticate")
        .json(&json!({ "username": "mallory", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: the response must not leak which check failed
    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;
    let id = app.create_dashboard("Sales").await;

    let response = app
        .get(&format!("/dashboards/{}", id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_fetches_dashboard_by_id() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "secret", &["USER"]).await;
    let token = app.login("alice", "secret").await;

    let id = app.create_dashboard("Sales").await;

    let response = app
        .get(&format!("/dashboards/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "Sales");
    assert_eq!(body["data"]["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn test_list_dashboards_requires_admin_authority() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "secret", &["USER"]).await;
    app.register_user("root", "hunter2", &["ADMIN"]).await;
    app.create_dashboard("Sales").await;

    // Authenticated but lacking ADMIN: forbidden
    let user_token = app.login("alice", "secret").await;
    let response = app
        .get("/dashboards")
        .bearer_auth(&user_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // ADMIN: forwarded to the handler
    let admin_token = app.login("root", "hunter2").await;
    let response = app
        .get("/dashboards")
        .bearer_auth(&admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "secret", &["USER"]).await;
    let token = app.login("alice", "secret").await;
    let id = app.create_dashboard("Sales").await;

    let tampered = tamper(&token);
    assert_ne!(tampered, token);

    let response = app
        .get(&format!("/dashboards/{}", id))
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.create_dashboard("Sales").await;

    // Same secret, zero validity window: correctly signed but already dead
    let expired_issuer = TokenService::new(TEST_SECRET.as_bytes(), 0);
    let token = expired_issuer
        .issue(&Principal::new("alice", vec![Authority::User]))
        .expect("Failed to issue token");

    let response = app
        .get(&format!("/dashboards/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_route_ignores_invalid_token() {
    let app = TestApp::spawn().await;

    // Dashboard creation is open per policy, so a garbage token changes nothing
    let response = app
        .post("/dashboards")
        .bearer_auth("garbage-token")
        .json(&json!({ "title": "Sales" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_dashboard() {
    let app = TestApp::spawn().await;
    let id = app.create_dashboard("Old title").await;

    let response = app
        .put(&format!("/dashboards/{}", id))
        .json(&json!({ "title": "New title" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "New title");
}

#[tokio::test]
async fn test_update_missing_dashboard() {
    let app = TestApp::spawn().await;

    let response = app
        .put("/dashboards/999")
        .json(&json!({ "title": "Ghost" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_dashboard() {
    let app = TestApp::spawn().await;
    let id = app.create_dashboard("Temp").await;

    let response = app
        .delete(&format!("/dashboards/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("deleted successfully"));

    // Gone now
    let response = app
        .delete(&format!("/dashboards/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_authenticated_end_to_end_flow() {
    let app = TestApp::spawn().await;

    app.register_user("alice", "secret", &["USER"]).await;
    let token = app.login("alice", "secret").await;
    let id = app.create_dashboard("Quarterly").await;

    // Valid bearer token reaches the handler
    let response = app
        .get(&format!("/dashboards/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // The same request with a tampered token never does
    let response = app
        .get(&format!("/dashboards/{}", id))
        .bearer_auth(tamper(&token))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
