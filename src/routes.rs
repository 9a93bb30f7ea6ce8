//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/api/*` is proxied to the upstream API, `/healthz` answers liveness
//! probes, and everything else is the built single-page app. Unknown paths
//! fall back to `index.html` so client-side routes survive a reload.

use axum::Router;
use axum::routing::{any, get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::proxy::{self, ProxyState};

async fn healthz() -> &'static str {
    "ok"
}

/// Build the full host router.
pub fn app(config: &HostConfig, client: reqwest::Client) -> Router {
    let proxy_state = ProxyState { client, upstream: config.api_upstream.clone() };
    let spa = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.dist_dir.join("index.html")));

    Router::new()
        .route("/api/{*rest}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(proxy_state)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}
