//! HTTP-level tests for the users and auth routers, driven through
//! `tower::ServiceExt::oneshot` against an in-memory repository.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_addresses::{AddressResult, CepAddress, CepResolver};
use domain_users::{auth_handlers, handlers, InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const JWT_SECRET: &str = "handler-test-secret-that-is-long-enough";

/// Resolver with a single known CEP, no network involved.
#[derive(Clone, Copy)]
struct FixedCep;

#[async_trait]
impl CepResolver for FixedCep {
    async fn resolve(&self, _cep: &str) -> AddressResult<CepAddress> {
        Ok(CepAddress {
            cep: "01001-000".to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Sé".to_string(),
            road: "Praça da Sé".to_string(),
        })
    }
}

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new(), FixedCep);
    let jwt = JwtAuth::new(&JwtConfig::new(JWT_SECRET));

    Router::new()
        .nest("/users", handlers::router(service.clone()))
        .nest("/auth", auth_handlers::router(Arc::new(service), jwt))
}

fn register_body(cpf: &str, email: &str) -> Value {
    json!({
        "cpf": cpf,
        "name": "Fulano de Tal",
        "email": email,
        "password": "s3cret-pass",
        "sex": "M",
        "date_birth": "1990-05-17",
        "cep": "01001000",
        "number": "42"
    })
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn send_get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_register_returns_201_without_password() {
    let app = app();

    let (status, body) =
        send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["active"], true);
    assert!(body.get("password").is_none());
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_register_rejects_invalid_payload() {
    let app = app();

    let mut body = register_body("123", "a@x.com");
    body["password"] = json!("short");

    let (status, _) = send_json(&app, "POST", "/users", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = app();
    send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;

    let (status, body) =
        send_json(&app, "POST", "/users", register_body("12345678912", "a@x.com")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User with this email already exists.");
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = app();
    let (_, created) =
        send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_get(&app, &format!("/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, _) = send_get(
        &app,
        "/users/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_rejects_malformed_id() {
    let app = app();
    let (status, _) = send_get(&app, "/users/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_paginates_and_404s_when_empty() {
    let app = app();

    let (status, body) = send_get(&app, "/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Users not found");

    for i in 0..3 {
        send_json(
            &app,
            "POST",
            "/users",
            register_body(&format!("1234567891{}", i), &format!("user{}@x.com", i)),
        )
        .await;
    }

    let (status, body) = send_get(&app, "/users?skip=0&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = send_get(&app, "/users?skip=10&limit=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_issues_bearer_token() {
    let app = app();
    send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/auth",
        json!({"email": "a@x.com", "password": "s3cret-pass"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_identically() {
    let app = app();
    send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;

    let (wrong_status, wrong_body) = send_json(
        &app,
        "POST",
        "/auth",
        json!({"email": "a@x.com", "password": "wrong-password"}),
    )
    .await;
    let (unknown_status, unknown_body) = send_json(
        &app,
        "POST",
        "/auth",
        json!({"email": "nobody@x.com", "password": "s3cret-pass"}),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["message"], "Incorrect email or password");
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[tokio::test]
async fn test_token_introspection() {
    let app = app();
    let (_, created) =
        send_json(&app, "POST", "/users", register_body("12345678911", "a@x.com")).await;

    let (_, login) = send_json(
        &app,
        "POST",
        "/auth",
        json!({"email": "a@x.com", "password": "s3cret-pass"}),
    )
    .await;
    let token = login["access_token"].as_str().unwrap();

    let request = Request::builder()
        .uri("/auth")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, claims) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(claims["sub"], created["id"]);

    let request = Request::builder()
        .uri("/auth")
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}
