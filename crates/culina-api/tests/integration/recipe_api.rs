//! Recipe endpoint tests: CRUD, representations, and ownership scoping.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{read_json, TestApp};

async fn create_tag(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .request_with_token("POST", "/recipe/tags", token, Some(json!({"name": name})))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await["id"].as_str().unwrap().to_string()
}

async fn create_ingredient(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .request_with_token(
            "POST",
            "/recipe/ingredients",
            token,
            Some(json!({"name": name})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await["id"].as_str().unwrap().to_string()
}

async fn create_recipe(app: &TestApp, token: &str, payload: serde_json::Value) -> String {
    let response = app
        .request_with_token("POST", "/recipe/recipes", token, Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await["id"].as_str().unwrap().to_string()
}

fn sample_payload(title: &str) -> serde_json::Value {
    json!({"title": title, "time_minutes": 22, "price": 5.25})
}

#[tokio::test]
async fn test_recipes_require_auth() {
    let app = TestApp::new().await;
    let list = app.request("GET", "/recipe/recipes", None).await;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);
    let create = app
        .request("POST", "/recipe/recipes", Some(sample_payload("Pie")))
        .await;
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_summary_representation() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    create_recipe(&app, &token, sample_payload("Chocolate cake")).await;

    let response = app
        .request_with_token("GET", "/recipe/recipes", &token, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Chocolate cake");
    assert_eq!(recipes[0]["time_minutes"], 22);
    assert_eq!(recipes[0]["price"], 5.25);
    assert_eq!(recipes[0]["link"], "");
    assert!(recipes[0]["tags"].as_array().unwrap().is_empty());
    assert!(recipes[0].get("user_id").is_none());
}

#[tokio::test]
async fn test_create_recipe_missing_time_minutes_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token(
            "POST",
            "/recipe/recipes",
            &token,
            Some(json!({"title": "Pie", "price": 5.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["message"], "time_minutes: this field is required");
}

#[tokio::test]
async fn test_create_recipe_blank_title_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token(
            "POST",
            "/recipe/recipes",
            &token,
            Some(json!({"title": "", "time_minutes": 5, "price": 1.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_recipe_with_unknown_tag_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let mut payload = sample_payload("Pie");
    payload["tags"] = json!([Uuid::new_v4().to_string()]);
    let response = app
        .request_with_token("POST", "/recipe/recipes", &token, Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["category"], "validation");
}

#[tokio::test]
async fn test_retrieve_returns_detail_with_nested_attachments() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let vegan = create_tag(&app, &token, "Vegan").await;
    let kale = create_ingredient(&app, &token, "Kale").await;
    let mut payload = sample_payload("Salad");
    payload["tags"] = json!([vegan]);
    payload["ingredients"] = json!([kale]);
    let id = create_recipe(&app, &token, payload).await;

    let response = app
        .request_with_token("GET", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["title"], "Salad");
    assert_eq!(body["tags"][0]["name"], "Vegan");
    assert_eq!(body["tags"][0]["id"], vegan);
    assert_eq!(body["ingredients"][0]["name"], "Kale");
}

#[tokio::test]
async fn test_list_uses_id_arrays_not_nested_objects() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let vegan = create_tag(&app, &token, "Vegan").await;
    let mut payload = sample_payload("Salad");
    payload["tags"] = json!([vegan]);
    create_recipe(&app, &token, payload).await;

    let body = read_json(
        app.request_with_token("GET", "/recipe/recipes", &token, None)
            .await,
    )
    .await;
    assert_eq!(body[0]["tags"][0], vegan);
}

#[tokio::test]
async fn test_retrieve_cross_owner_returns_404() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let other_token = app
        .register_and_login("other@example.com", "otherpass")
        .await;
    let id = create_recipe(&app, &other_token, sample_payload("Theirs")).await;

    let response = app
        .request_with_token("GET", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"]["category"], "not_found");
}

#[tokio::test]
async fn test_malformed_recipe_id_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let response = app
        .request_with_token("GET", "/recipe/recipes/not-a-uuid", &token, None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_replaces_and_clears_absent_attachments() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let vegan = create_tag(&app, &token, "Vegan").await;
    let mut payload = sample_payload("Pie");
    payload["tags"] = json!([vegan]);
    payload["link"] = json!("https://example.com/pie");
    let id = create_recipe(&app, &token, payload).await;

    let response = app
        .request_with_token(
            "PUT",
            &format!("/recipe/recipes/{id}"),
            &token,
            Some(json!({"title": "Plain pie", "time_minutes": 30, "price": 4.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["title"], "Plain pie");
    assert_eq!(body["link"], "");
    assert!(body["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_put_missing_required_field_returns_400() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let id = create_recipe(&app, &token, sample_payload("Pie")).await;

    let response = app
        .request_with_token(
            "PUT",
            &format!("/recipe/recipes/{id}"),
            &token,
            Some(json!({"title": "No price", "time_minutes": 30})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_merges_present_fields() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let vegan = create_tag(&app, &token, "Vegan").await;
    let mut payload = sample_payload("Pie");
    payload["tags"] = json!([vegan]);
    let id = create_recipe(&app, &token, payload).await;

    let response = app
        .request_with_token(
            "PATCH",
            &format!("/recipe/recipes/{id}"),
            &token,
            Some(json!({"title": "Better pie"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["title"], "Better pie");
    assert_eq!(body["time_minutes"], 22);
    assert_eq!(body["tags"][0], vegan);
}

#[tokio::test]
async fn test_patch_with_empty_array_clears_attachments() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let vegan = create_tag(&app, &token, "Vegan").await;
    let mut payload = sample_payload("Pie");
    payload["tags"] = json!([vegan]);
    let id = create_recipe(&app, &token, payload).await;

    let response = app
        .request_with_token(
            "PATCH",
            &format!("/recipe/recipes/{id}"),
            &token,
            Some(json!({"tags": []})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_patch_cross_owner_returns_404_and_mutates_nothing() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let other_token = app
        .register_and_login("other@example.com", "otherpass")
        .await;
    let id = create_recipe(&app, &other_token, sample_payload("Theirs")).await;

    let response = app
        .request_with_token(
            "PATCH",
            &format!("/recipe/recipes/{id}"),
            &token,
            Some(json!({"title": "Hijacked"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let owner_view = app
        .request_with_token("GET", &format!("/recipe/recipes/{id}"), &other_token, None)
        .await;
    let body = read_json(owner_view).await;
    assert_eq!(body["title"], "Theirs");
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let id = create_recipe(&app, &token, sample_payload("Pie")).await;

    let deleted = app
        .request_with_token("DELETE", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = app
        .request_with_token("GET", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let again = app
        .request_with_token("DELETE", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_cross_owner_returns_404_and_leaves_recipe() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let other_token = app
        .register_and_login("other@example.com", "otherpass")
        .await;
    let id = create_recipe(&app, &other_token, sample_payload("Theirs")).await;

    let response = app
        .request_with_token("DELETE", &format!("/recipe/recipes/{id}"), &token, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let still_there = app
        .request_with_token("GET", &format!("/recipe/recipes/{id}"), &other_token, None)
        .await;
    assert_eq!(still_there.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_recipes_scoped_and_in_insertion_order() {
    let app = TestApp::new().await;
    let token = app
        .register_and_login("test@example.com", "testpass123")
        .await;
    let other_token = app
        .register_and_login("other@example.com", "otherpass")
        .await;
    create_recipe(&app, &token, sample_payload("First")).await;
    create_recipe(&app, &token, sample_payload("Second")).await;
    create_recipe(&app, &other_token, sample_payload("Theirs")).await;

    let body = read_json(
        app.request_with_token("GET", "/recipe/recipes", &token, None)
            .await,
    )
    .await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
