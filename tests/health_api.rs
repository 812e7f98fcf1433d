//! Router-level tests for the liveness endpoint and the JSON fallback.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

async fn send(method: Method, uri: &str, body: Body) -> axum::response::Response {
    heartbeat::create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[tokio::test]
async fn test_health_check() {
    let before = now_millis();
    let response = send(Method::GET, "/api/health", Body::empty()).await;
    let after = now_millis();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    let ts = json["ts"].as_i64().expect("ts is an integer");
    assert!(before <= ts && ts <= after);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_health_timestamps_non_decreasing() {
    let first = body_json(send(Method::GET, "/api/health", Body::empty()).await).await;
    let second = body_json(send(Method::GET, "/api/health", Body::empty()).await).await;

    let first_ts = first["ts"].as_i64().unwrap();
    let second_ts = second["ts"].as_i64().unwrap();
    assert!(first_ts <= second_ts);
    assert!((now_millis() - second_ts).abs() < 5_000);
}

#[tokio::test]
async fn test_health_ignores_request_body() {
    let response = send(Method::GET, "/api/health", Body::from("this is not json at all")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], true);
}

#[tokio::test]
async fn test_health_head() {
    let response = send(Method::HEAD, "/api/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_wrong_method_returns_json_404() {
    let response = send(Method::POST, "/api/health?x=1", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let json = body_json(response).await;
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "Route POST:/api/health?x=1 not found");
    assert_eq!(json["statusCode"], 404);
}

#[tokio::test]
async fn test_unknown_route_keeps_query_in_message() {
    let response = send(Method::GET, "/status?verbose=true", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Route GET:/status?verbose=true not found"
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = send(Method::GET, "/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "Route GET:/health not found");
    assert_eq!(json["statusCode"], 404);
}

#[tokio::test]
async fn test_unknown_route_keeps_method_in_message() {
    let response = send(Method::DELETE, "/api/health/extra", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Route DELETE:/api/health/extra not found"
    );
}
