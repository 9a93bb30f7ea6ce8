use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, Method, Uri};
use axum::routing::any;

use super::*;
use crate::config::HostConfig;

// =============================================================================
// Helpers
// =============================================================================

/// Upstream stand-in: echoes what it received, and rejects `/api/me/expired`.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    if uri.path() == "/api/me/expired" {
        return (StatusCode::UNAUTHORIZED, r#"{"message":"expired"}"#).into_response();
    }
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let mut response = format!("{method} {uri} auth={auth} type={content_type} body={body}").into_response();
    response
        .headers_mut()
        .insert("x-upstream", HeaderValue::from_static("yes"));
    response
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn dist_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boardgame-shelf-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<!DOCTYPE html><title>shelf</title>").unwrap();
    dir
}

async fn host(name: &str) -> SocketAddr {
    let upstream = serve(Router::new().route("/{*path}", any(echo))).await;
    let config = HostConfig {
        port: 0,
        api_upstream: format!("http://{upstream}"),
        dist_dir: dist_dir(name),
    };
    serve(crate::routes::app(&config, reqwest::Client::new())).await
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_joins_origin_and_path() {
    assert_eq!(
        upstream_url("http://api:8080/", "/api/me/plays?page=1"),
        "http://api:8080/api/me/plays?page=1"
    );
}

#[test]
fn strip_hop_by_hop_keeps_end_to_end_headers() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.insert("content-length", HeaderValue::from_static("10"));
    headers.insert("authorization", HeaderValue::from_static("Bearer tok"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    strip_hop_by_hop(&mut headers);
    assert_eq!(headers.len(), 2);
    assert!(headers.contains_key("authorization"));
    assert!(headers.contains_key("content-type"));
}

// =============================================================================
// End to end
// =============================================================================

#[tokio::test]
async fn forwards_method_path_query_and_authorization() {
    let addr = host("forward").await;
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/me/wishlist?x=1"))
        .header("authorization", "Bearer tok123")
        .header("content-type", "application/json")
        .body(r#"{"name":"Azul"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("x-upstream").unwrap(), "yes");
    assert_eq!(
        resp.text().await.unwrap(),
        r#"POST /api/me/wishlist?x=1 auth=Bearer tok123 type=application/json body={"name":"Azul"}"#
    );
}

#[tokio::test]
async fn relays_unauthorized_status_unchanged() {
    let addr = host("unauthorized").await;
    let resp = reqwest::get(format!("http://{addr}/api/me/expired")).await.unwrap();
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.text().await.unwrap(), r#"{"message":"expired"}"#);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let config = HostConfig {
        port: 0,
        api_upstream: "http://127.0.0.1:9".to_owned(),
        dist_dir: dist_dir("unreachable"),
    };
    let addr = serve(crate::routes::app(&config, reqwest::Client::new())).await;
    let resp = reqwest::get(format!("http://{addr}/api/me/boardgames")).await.unwrap();
    assert_eq!(resp.status(), 502);
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let addr = host("spa").await;
    let resp = reqwest::get(format!("http://{addr}/wishlist")).await.unwrap();
    assert!(resp.text().await.unwrap().contains("<title>shelf</title>"));

    let health = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");
}
