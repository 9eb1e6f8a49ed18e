use anyhow::{Context, Result};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tea_house::{api, config, logging, store::InMemoryTeaStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_config();
    let config = config::get_config();
    logging::init_tracing(config);

    let store = Arc::new(InMemoryTeaStore::new());
    let app = api::create_router(store);

    let port = config.port;
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    tracing::info!(port, "Server is running at port: {port}...");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;
    Ok(())
}
