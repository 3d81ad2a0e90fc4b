//! Configuration for the dashboard client

use crate::error::{Error, Result};

/// Placeholder backend address used when `BACKEND_URL` is unset,
/// matching the local development default of the backend service.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Dashboard client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend service, without a trailing slash
    pub backend_url: String,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::with_backend_url(backend_url)
    }

    /// Build a configuration pointing at an explicit backend address
    pub fn with_backend_url(url: impl Into<String>) -> Self {
        let mut backend_url: String = url.into();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self { backend_url }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.is_empty() {
            return Err(Error::Config("backend_url must not be empty".into()));
        }
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "backend_url must be an http(s) address: {}",
                self.backend_url
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_backend_url(DEFAULT_BACKEND_URL)
    }
}
