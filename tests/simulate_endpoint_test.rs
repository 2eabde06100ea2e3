use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use kex_compare::{web, Demo};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    web::router(Arc::new(Demo::new()))
}

const BOUNDARY: &str = "kexboundary";

async fn post_form(body: &str) -> (StatusCode, Value) {
    post(Some("application/x-www-form-urlencoded"), body.to_string()).await
}

async fn post_multipart(fields: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    post(Some(&content_type), body).await
}

async fn post(content_type: Option<&str>, body: String) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::POST).uri("/simulate");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_simulate_success() {
    let (status, json) = post_form("username=alice&password=secret123").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(json["classical"].as_array().unwrap().len(), 7);
    assert_eq!(json["pqc"].as_array().unwrap().len(), 7);
    assert_eq!(json["classical"][0]["id"], "c1");
    assert_eq!(json["classical"][0]["label"], "Capture Credentials");
    assert_eq!(json["classical"][0]["data"], "User: alice");
    assert_eq!(json["pqc"][6]["id"], "p7");
    assert_eq!(json["comparison"]["classical"]["algo"], "ECDH (SECP256R1) + AES");
    assert_eq!(json["comparison"]["classical"]["quantum_safe"], "NO (Shor's Algorithm)");
    assert_eq!(json["comparison"]["pqc"]["quantum_safe"], "YES (Lattice-Based)");
}

#[tokio::test]
async fn test_simulate_empty_password() {
    let (status, json) = post_form("username=alice&password=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Missing credentials" }));
}

#[tokio::test]
async fn test_simulate_missing_fields() {
    for body in ["password=secret123", "username=alice", ""] {
        let (status, json) = post_form(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(json["error"], "Missing credentials");
        assert!(json.get("classical").is_none());
        assert!(json.get("pqc").is_none());
        assert!(json.get("comparison").is_none());
    }
}

#[tokio::test]
async fn test_simulate_multipart() {
    let (status, json) = post_multipart(&[("username", "alice"), ("password", "secret123")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["classical"][0]["data"], "User: alice");
    assert_eq!(json["pqc"][0]["data"], "User: alice");
    assert_eq!(json["comparison"]["pqc"]["pk_size"], "1184 Bytes");
}

#[tokio::test]
async fn test_simulate_multipart_missing_password() {
    let (status, json) = post_multipart(&[("username", "alice")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Missing credentials" }));
}

#[tokio::test]
async fn test_simulate_without_content_type() {
    for body in ["", "username=alice&password=secret123"] {
        let (status, json) = post(None, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(json, serde_json::json!({ "error": "Missing credentials" }));
    }
}

#[tokio::test]
async fn test_simulate_unsupported_content_type() {
    let body = r#"{"username":"alice","password":"secret123"}"#.to_string();
    let (status, json) = post(Some("application/json"), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing credentials");
}

#[tokio::test]
async fn test_simulate_duplicate_fields_use_first() {
    let (status, json) = post_form("username=alice&username=mallory&password=secret123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["classical"][0]["data"], "User: alice");

    let (status, json) = post_multipart(&[
        ("username", "alice"),
        ("password", "secret123"),
        ("username", "mallory"),
    ])
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pqc"][0]["data"], "User: alice");
}

#[tokio::test]
async fn test_simulate_malformed_multipart() {
    // no boundary parameter
    let (status, json) = post(Some("multipart/form-data"), "garbage".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing credentials");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_simulate_rejects_get() {
    let request = Request::builder()
        .uri("/simulate")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
