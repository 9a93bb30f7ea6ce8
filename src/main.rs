mod config;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "boardgame-shelf failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let client = reqwest::Client::builder().build()?;
    let app = routes::app(&config, client);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        upstream = %config.api_upstream,
        dist = %config.dist_dir.display(),
        "boardgame-shelf listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
