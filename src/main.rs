use std::sync::Arc;

use anyhow::{Context, Result};
use kex_compare::{web, Config, Demo};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_addr()?;
    info!("Pipelines: ECDH (P-256) + AES-CFB | ML-KEM-768 + AES-CFB");

    let app = web::router(Arc::new(Demo::new()));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;
    Ok(())
}
