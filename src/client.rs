//! Low-level HTTP plumbing shared by the gateways
//!
//! Thin JSON client over the backend service:
//! - GET/POST with `Content-Type: application/json`
//! - Non-2xx statuses mapped to [`Error::Http`]
//! - No auth headers (operator identity is out of scope)
//! - No configured timeout beyond the transport default

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};

/// JSON client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

/// Health route payload
#[derive(Debug, serde::Deserialize)]
struct HealthResponse {
    status: String,
}

impl BackendClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.backend_url.clone(),
        }
    }

    /// Backend base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe against the backend health route
    pub async fn health(&self) -> bool {
        match self.get::<HealthResponse>("/api/health").await {
            Ok(health) => health.status == "ok",
            Err(err) => {
                tracing::debug!(error = %err, "health probe failed");
                false
            }
        }
    }

    /// Perform a GET request, decoding the JSON response
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Perform a POST request with a JSON body, decoding the JSON response
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle a backend response, checking status before decoding
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
