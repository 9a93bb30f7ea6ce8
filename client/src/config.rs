//! Static client configuration.

/// Where API calls go and where a rejected session is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every API path (the host proxies it upstream).
    pub base_url: String,
    /// Full-page navigation target after an authorization failure.
    pub login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "/api".to_owned(), login_path: crate::routes::LOGIN_PATH.to_owned() }
    }
}
