//! Registration, token, and profile endpoint tests.

use axum::http::{header, StatusCode};
use serde_json::json;

use crate::common::{read_json, TestApp};

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "email": "test@example.com",
                "password": "testpass123",
                "name": "Test Name",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["name"], "Test Name");
}

#[tokio::test]
async fn test_create_user_never_returns_password() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "email": "test@example.com",
                "password": "testpass123",
                "name": "Test Name",
            })),
        )
        .await;
    let body = read_json(response).await;
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_normalizes_email() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "email": "Test@EXAMPLE.com",
                "password": "testpass123",
                "name": "Test Name",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["email"], "test@example.com");
}

#[tokio::test]
async fn test_create_user_duplicate_email_returns_400() {
    let app = TestApp::new().await;
    let payload = json!({
        "email": "test@example.com",
        "password": "testpass123",
        "name": "Test Name",
    });
    app.request("POST", "/user/create", Some(payload.clone()))
        .await;
    let response = app.request("POST", "/user/create", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["category"], "validation");
}

#[tokio::test]
async fn test_create_user_short_password_returns_400_and_persists_nothing() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "email": "test@example.com",
                "password": "pw",
                "name": "Test Name",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let stored = app
        .state
        .users
        .find_by_email("test@example.com")
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_create_user_missing_email_returns_400() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({"password": "testpass123", "name": "Test Name"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_without_name_succeeds() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/create",
            Some(json!({"email": "test@example.com", "password": "testpass123"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["name"], "");
}

#[tokio::test]
async fn test_token_issued_for_valid_credentials() {
    let app = TestApp::new().await;
    app.register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "test@example.com", "password": "testpass123"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["token"].as_str().unwrap().len(), 32);
}

#[tokio::test]
async fn test_token_repeat_issue_returns_same_key() {
    let app = TestApp::new().await;
    let first = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let second = app.token_for("test@example.com", "testpass123").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_token_wrong_password_returns_400_without_token_field() {
    let app = TestApp::new().await;
    app.register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "test@example.com", "password": "wrongpass"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body.get("token").is_none());
    assert_eq!(body["error"]["category"], "authentication");
}

#[tokio::test]
async fn test_token_unknown_user_returns_same_generic_400() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "ghost@example.com", "password": "testpass123"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Unable to authenticate with provided credentials"
    );
}

#[tokio::test]
async fn test_token_missing_fields_return_400() {
    let app = TestApp::new().await;
    let response = app.request("POST", "/user/token", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/user/me", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_me_rejects_invalid_token() {
    let app = TestApp::new().await;
    let response = app
        .request_with_token("GET", "/user/me", "not-a-real-token", None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app.request_with_token("GET", "/user/me", &token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["name"], "Test Name");
}

#[tokio::test]
async fn test_post_me_not_allowed() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token("POST", "/user/me", &token, Some(json!({})))
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_post_me_unauthenticated_is_401_not_405() {
    let app = TestApp::new().await;
    let response = app.request("POST", "/user/me", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_patch_me_updates_name_and_password() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token(
            "PATCH",
            "/user/me",
            &token,
            Some(json!({"name": "New Name", "password": "newpassword"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["name"], "New Name");

    // The new password verifies; the old one no longer does.
    app.token_for("test@example.com", "newpassword").await;
    let old = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "test@example.com", "password": "testpass123"})),
        )
        .await;
    assert_eq!(old.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_me_short_password_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token("PATCH", "/user/me", &token, Some(json!({"password": "pw"})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inactive_user_is_rejected_everywhere() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let user = app
        .state
        .users
        .find_by_email("test@example.com")
        .await
        .unwrap()
        .unwrap();
    app.state.users.set_active(user.id, false).await.unwrap();

    let me = app.request_with_token("GET", "/user/me", &token, None).await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

    let login = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "test@example.com", "password": "testpass123"})),
        )
        .await;
    assert_eq!(login.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_end_to_end_register_token_me() {
    let app = TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "email": "test@test.com",
                "password": "testpassword",
                "name": "Test name",
            })),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let token_response = app
        .request(
            "POST",
            "/user/token",
            Some(json!({"email": "test@test.com", "password": "testpassword"})),
        )
        .await;
    assert_eq!(token_response.status(), StatusCode::OK);
    let token = read_json(token_response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let me = app.request_with_token("GET", "/user/me", &token, None).await;
    assert_eq!(me.status(), StatusCode::OK);
    let body = read_json(me).await;
    assert_eq!(body["name"], "Test name");
    assert_eq!(body["email"], "test@test.com");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}
