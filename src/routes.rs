//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the backend proxy and the Leptos SSR app under a
//! single Axum router. Backend-owned paths are matched first; everything else
//! is a client route rendered by Leptos.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::proxy::{self, Proxy};

/// Backend routes: the REST API, the OAuth legs, and the health probe.
///
/// `/oauth2/callback` is not proxied: it is the client route the backend
/// redirects back to after Google sign-in.
pub fn backend_routes(proxy: Proxy) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/oauth2/authorization/{*path}", any(proxy::forward))
        .route("/login/oauth2/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}

/// Full host: backend routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(proxy: Proxy) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(render_client_route)
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(backend_routes(proxy)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// SSR for client paths the generated route list does not know about.
///
/// The route tree depends on the session phase, which the server never
/// resolves, so only `/` is discovered at startup. Every other client path
/// (`/login`, `/expenses`, ...) is rendered here.
async fn render_client_route(State(options): State<LeptosOptions>, request: Request) -> Response {
    let render = leptos_axum::render_app_to_stream(move || client::app::shell(options.clone()));
    render(request).await.into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
