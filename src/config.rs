//! Host configuration parsed from environment variables.
//!
//! Optional: `PORT` (default 3000), `API_UPSTREAM` (default
//! `http://127.0.0.1:8080`), `DIST_DIR` (default `client/dist`). A `.env`
//! file is loaded first when present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("API_UPSTREAM must be an http(s) URL: {0:?}")]
    InvalidUpstream(String),
    #[error("http client init failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Origin the `/api` prefix is forwarded to, without trailing slash.
    pub api_upstream: String,
    /// Directory holding the built single-page app.
    pub dist_dir: PathBuf,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if `PORT` or `API_UPSTREAM` is malformed.
    pub fn from_env() -> Result<Self, HostError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if `PORT` or `API_UPSTREAM` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream = var("API_UPSTREAM").unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned());
        if !(api_upstream.starts_with("http://") || api_upstream.starts_with("https://")) {
            return Err(HostError::InvalidUpstream(api_upstream));
        }
        let api_upstream = api_upstream.trim_end_matches('/').to_owned();

        let dist_dir = var("DIST_DIR").map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);

        Ok(Self { port, api_upstream, dist_dir })
    }
}
