mod config;
mod proxy;
mod routes;
mod shutdown;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::proxy::Proxy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let proxy = Proxy::new(&config.api_url, config.proxy_timeout)?;
    tracing::info!(upstream = proxy.upstream(), timeout = ?config.proxy_timeout, "backend proxy ready");
    let app = routes::app(proxy)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "cashflow listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown::signal()).await?;
    tracing::info!("cashflow stopped");
    Ok(())
}
