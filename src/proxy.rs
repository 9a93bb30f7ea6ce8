//! Reverse proxy for the `/api` prefix.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single-page app calls `/api/...` on its own origin. This handler
//! forwards those calls to the real API verbatim: method, path, query, body,
//! and every end-to-end header including `Authorization`. Upstream statuses
//! come back unchanged, because the client pipeline relies on seeing a 401 to
//! clear a stale session.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to reach the upstream are answered here, as `502`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// Largest request body forwarded upstream (image uploads included).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("upstream unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Shared proxy state: one pooled HTTP client and the upstream origin.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub upstream: String,
}

/// Join the upstream origin with the incoming path and query.
pub(crate) fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", upstream.trim_end_matches('/'))
}

/// Drop headers that describe a single connection rather than the message.
pub(crate) fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
    headers.remove(CONTENT_LENGTH);
}

/// Forward one `/api` request upstream and relay the response.
///
/// # Errors
///
/// Returns `ProxyError` if the body cannot be read or the upstream cannot be
/// reached.
pub async fn forward(State(proxy): State<ProxyState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&proxy.upstream, path_and_query);

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;
    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(HOST);

    let upstream = proxy
        .client
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);
    let body = upstream.bytes().await?;

    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "api proxied");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
