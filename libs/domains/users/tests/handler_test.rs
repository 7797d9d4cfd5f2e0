//! Handler tests for the Users domain
//!
//! These tests drive the HTTP handlers end to end:
//! - Request deserialization and validation (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Only the users domain router is exercised, not the full application with
//! Swagger routes, tracing layers, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::{handlers, User, UserDto, UserService};
use http_body_util::BodyExt;
use object_cache::InMemoryObjectCache;
use serde_json::json;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn app() -> Router {
    let cache: InMemoryObjectCache<Uuid, User> = InMemoryObjectCache::new();
    handlers::router(UserService::new(cache))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn user_form(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "firstName": "Ann",
        "lastName": "Lee",
        "dateOfBirth": "1990-01-01"
    })
}

async fn create_user(app: &Router, form: &serde_json::Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(form.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201_with_generated_id() {
    let app = app();

    let response = create_user(&app, &user_form("a@b.com")).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["firstName"], "Ann");
    assert_eq!(body["lastName"], "Lee");
    assert_eq!(body["dateOfBirth"], "1990-01-01");
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = app();

    let created: UserDto = json_body(
        create_user(&app, &user_form("round@trip.com"))
            .await
            .into_body(),
    )
    .await;

    let response = get(&app, &format!("/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: UserDto = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let app = app();

    create_user(&app, &user_form("dup@example.com")).await;
    let response = create_user(&app, &user_form("dup@example.com")).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "email_already_registered");
}

#[tokio::test]
async fn test_create_underage_user_returns_400_and_stores_nothing() {
    let app = app();

    let mut form = user_form("kid@example.com");
    form["dateOfBirth"] = json!("2020-01-01");
    let response = create_user(&app, &form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert!(body["details"]["date_of_birth"].is_array());

    // Validation failed before the service ran, so the store stayed empty
    let list: Vec<UserDto> = json_body(get(&app, "/").await.into_body()).await;
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_create_with_empty_first_name_returns_400() {
    let app = app();

    let mut form = user_form("ann@example.com");
    form["firstName"] = json!("");
    let response = create_user(&app, &form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert!(body["details"]["first_name"].is_array());
}

#[tokio::test]
async fn test_create_with_invalid_email_returns_400() {
    let app = app();

    let response = create_user(&app, &user_form("not-an-email")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let app = app();

    let response = get(&app, &format!("/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_400() {
    let app = app();

    let response = get(&app, "/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_rejects_zero_page_number() {
    let app = app();

    let response = get(&app, "/?pageNumber=0&pageSize=10").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "invalid_pagination");
}

#[tokio::test]
async fn test_list_users_applies_defaults() {
    let app = app();
    for i in 0..3 {
        create_user(&app, &user_form(&format!("user{}@example.com", i))).await;
    }

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<UserDto> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 3);
}

#[tokio::test]
async fn test_list_users_pages_through_the_data() {
    let app = app();
    for i in 0..5 {
        create_user(&app, &user_form(&format!("user{}@example.com", i))).await;
    }

    let first: Vec<UserDto> = json_body(get(&app, "/?pageNumber=1&pageSize=2").await.into_body()).await;
    let third: Vec<UserDto> = json_body(get(&app, "/?pageNumber=3&pageSize=2").await.into_body()).await;
    let past_end: Vec<UserDto> =
        json_body(get(&app, "/?pageNumber=9&pageSize=2").await.into_body()).await;

    assert_eq!(first.len(), 2);
    assert_eq!(third.len(), 1);
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_update_user_returns_204_and_persists() {
    let app = app();

    let created: UserDto = json_body(
        create_user(&app, &user_form("before@example.com"))
            .await
            .into_body(),
    )
    .await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(user_form("after@example.com").to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: UserDto = json_body(get(&app, &format!("/{}", created.id)).await.into_body()).await;
    assert_eq!(fetched.email, "after@example.com");
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_update_to_taken_email_returns_409() {
    let app = app();

    create_user(&app, &user_form("taken@example.com")).await;
    let created: UserDto = json_body(
        create_user(&app, &user_form("mine@example.com"))
            .await
            .into_body(),
    )
    .await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(user_form("taken@example.com").to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let app = app();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(user_form("ghost@example.com").to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404_on_get() {
    let app = app();

    let created: UserDto = json_body(
        create_user(&app, &user_form("gone@example.com"))
            .await
            .into_body(),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let app = app();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
