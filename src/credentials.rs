//! Credential store client
//!
//! Bridges the locally edited credential form to the backend and surfaces
//! the server-held masked status. The secret is write-only: it rides along
//! on every save and is never echoed back by the server.

use crate::client::BackendClient;
use crate::error::Result;
use crate::types::{CredentialRequest, CredentialStatus};

const CREDENTIALS_PATH: &str = "/api/admin/kis/credentials";

/// Client for the backend credential record
#[derive(Debug, Clone)]
pub struct CredentialStore {
    client: BackendClient,
}

impl CredentialStore {
    /// Create a store client over an existing backend client
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch the masked status of the stored record.
    ///
    /// `None` covers both "nothing stored yet" and any fetch failure. Absence
    /// of status on load is a harmless first-run condition, so this is quieter
    /// than [`CredentialStore::save`]: no error reaches the caller.
    pub async fn fetch_status(&self) -> Option<CredentialStatus> {
        match self.client.get(CREDENTIALS_PATH).await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::debug!(error = %err, "credential status unavailable");
                None
            }
        }
    }

    /// Create-or-replace the stored record and return the fresh masked status.
    ///
    /// Always a full overwrite with the plaintext secret in the body; partial
    /// updates are not supported. Whether the backend inserts or updates is
    /// its own business. Any underlying failure is wrapped as
    /// [`crate::Error::SaveFailed`]; the caller must keep the typed secret in
    /// that case so the operator can retry without retyping.
    pub async fn save(&self, request: &CredentialRequest) -> Result<CredentialStatus> {
        let status: CredentialStatus = self
            .client
            .post(CREDENTIALS_PATH, request)
            .await
            .map_err(crate::error::Error::into_save_failed)?;

        tracing::info!(is_paper = status.is_paper, "credential record saved");
        Ok(status)
    }
}
