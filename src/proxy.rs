//! Reverse proxy from the SSR host to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so `/api/*` calls and the OAuth
//! entry/return legs are forwarded verbatim to `CASHFLOW_API_URL`. Redirects
//! are passed through rather than followed: the OAuth flow depends on the
//! browser seeing the backend's `302`s.
//!
//! ERROR HANDLING
//! ==============
//! Proxy failures answer with the backend's own envelope shape
//! (`{ success: false, message, data: null }`) so the client decodes them
//! like any other rejection.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Headers that describe a single hop and must not be forwarded.
const HOP_HEADERS: [header::HeaderName; 8] = [
    header::CONNECTION,
    header::HOST,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Errors raised while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The inbound body could not be read or was too large.
    #[error("request body rejected: {0}")]
    Body(String),

    /// The backend did not answer within the configured timeout.
    #[error("backend timed out")]
    Timeout,

    /// The backend could not be reached or the exchange failed midway.
    #[error("backend unavailable: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

/// Failure body in the backend's response envelope shape.
#[derive(Debug, Serialize)]
struct FailureEnvelope {
    success: bool,
    message: String,
    data: Option<()>,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = FailureEnvelope { success: false, message: self.to_string(), data: None };
        (status, Json(body)).into_response()
    }
}

/// Shared forwarding state: one pooled client and the backend origin.
#[derive(Clone, Debug)]
pub struct Proxy {
    http: reqwest::Client,
    upstream: Arc<str>,
}

impl Proxy {
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the TLS backend cannot start.
    pub fn new(upstream: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) })
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// Absolute backend URL for an inbound request URI.
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
        format!("{}{path_and_query}", self.upstream)
    }
}

/// Remove hop-by-hop headers in place.
pub fn strip_hop_headers(headers: &mut HeaderMap) {
    for name in &HOP_HEADERS {
        headers.remove(name);
    }
}

/// Axum handler forwarding any method to the backend.
///
/// # Errors
///
/// Returns a [`ProxyError`] response when the body is unreadable or the
/// backend cannot be reached.
pub async fn forward(State(proxy): State<Proxy>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = proxy.target_url(&parts.uri);
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut headers = parts.headers;
    strip_hop_headers(&mut headers);

    tracing::debug!(method = %parts.method, %url, "proxying request");
    let upstream = proxy.http.request(parts.method.clone(), &url).headers(headers).body(body).send().await;
    let upstream = match upstream {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(method = %parts.method, %url, error = %e, "backend request failed");
            return Err(e.into());
        }
    };

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_headers(&mut response_headers);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
