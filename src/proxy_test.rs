use axum::http::HeaderValue;

use super::*;

fn proxy() -> Proxy {
    Proxy::new("http://backend:8080/", Duration::from_secs(5)).unwrap()
}

// =============================================================================
// URL + header handling
// =============================================================================

#[test]
fn target_url_keeps_path_and_query() {
    let uri: Uri = "/api/expenses/summary/range/7?startDate=2026-01-01&endDate=2026-01-31".parse().unwrap();
    assert_eq!(
        proxy().target_url(&uri),
        "http://backend:8080/api/expenses/summary/range/7?startDate=2026-01-01&endDate=2026-01-31"
    );
}

#[test]
fn upstream_is_stored_without_trailing_slash() {
    assert_eq!(proxy().upstream(), "http://backend:8080");
}

#[test]
fn strip_hop_headers_keeps_end_to_end_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("JSESSIONID=abc"));

    strip_hop_headers(&mut headers);

    assert_eq!(headers.len(), 2);
    assert!(headers.contains_key(header::CONTENT_TYPE));
    assert!(headers.contains_key(header::COOKIE));
}

// =============================================================================
// Error responses
// =============================================================================

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("too large".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::ClientBuild("tls".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn proxy_error_body_uses_backend_envelope() {
    let response = ProxyError::Upstream("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "backend unavailable: connection refused");
    assert!(body["data"].is_null());
}
