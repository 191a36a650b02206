use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, header};
use axum::response::Redirect;
use axum::routing::post;
use tower::ServiceExt;

use super::*;

/// Spawn a stand-in backend on an ephemeral port and return its origin.
async fn stub_backend() -> String {
    let backend = Router::new()
        .route(
            "/api/users/login",
            post(|body: String| async move {
                let echoed: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
                axum::Json(serde_json::json!({
                    "success": true,
                    "message": "Login successful",
                    "data": { "id": 1, "username": echoed["username"], "email": "a@example.com" }
                }))
            }),
        )
        .route("/oauth2/authorization/google", get(|| async { Redirect::to("https://accounts.google.com/o/oauth2/auth") }))
        .route("/api/expenses/user/{id}", get(|| async { (StatusCode::NOT_FOUND, "{\"success\":false,\"message\":\"User not found\"}") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

fn router_for(upstream: &str) -> Router {
    backend_routes(Proxy::new(upstream, Duration::from_secs(5)).unwrap())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Proxy
// =============================================================================

#[tokio::test]
async fn api_request_is_forwarded_with_body() {
    let upstream = stub_backend().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"alice","password":"pw"}"#))
        .unwrap();

    let response = router_for(&upstream).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "alice");
}

#[tokio::test]
async fn backend_rejection_status_passes_through() {
    let upstream = stub_backend().await;
    let response = router_for(&upstream)
        .oneshot(Request::get("/api/expenses/user/99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User not found");
}

#[tokio::test]
async fn oauth_redirect_is_returned_not_followed() {
    let upstream = stub_backend().await;
    let response = router_for(&upstream)
        .oneshot(Request::get("/oauth2/authorization/google").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://accounts.google.com/o/oauth2/auth")
    );
}

#[tokio::test]
async fn oauth_callback_route_is_not_proxied() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(Request::get("/oauth2/callback?userId=1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_envelope() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(Request::get("/api/users/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("backend unavailable"));
}
