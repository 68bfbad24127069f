use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use shortly::config::Config;
use shortly::infrastructure::persistence::MemoryRecordStore;
use shortly::routes::app_router;
use shortly::server::build_state;
use std::sync::Arc;
use tower::ServiceExt;

fn config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: "https://sho.rt/".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        default_expiration: "7 days".to_string(),
        code_length: 12,
        code_max_attempts: 5,
        cors_allowed_origins: vec!["*".to_string()],
    }
}

fn app() -> tower_http::normalize_path::NormalizePath<axum::Router> {
    let config = config();
    let state = build_state(&config, Arc::new(MemoryRecordStore::new()));
    app_router(state, &config.cors_allowed_origins)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_full_router_uses_configuration() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/shorten")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "original_url": "https://example.com", "user_id": "u1" }).to_string(),
        ))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 12);
    assert_eq!(json["short_url"], format!("https://sho.rt/{code}"));
    assert_eq!(json["expiration"], "7 days");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (status, json) = send(get("/api/urls/u1/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let (status, _) = send(get("/health/")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (status, json) = send(get("/r/abc123")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://app.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    let allow_origin = response.headers().get("access-control-allow-origin").unwrap();
    assert_eq!(allow_origin.to_str().unwrap(), "*");
}
