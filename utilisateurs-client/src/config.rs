//! Client configuration

/// Default API root when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Connection settings for the utilisateurs API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, resource segments are appended to it
    /// (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// API root without trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
