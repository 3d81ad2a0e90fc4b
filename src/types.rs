//! Wire types shared between the gateways and the controller.
//!
//! Field names match the backend JSON schema exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A scored trading candidate produced by the surge detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Instrument symbol, unique within a single response
    pub symbol: String,
    /// Normalized confidence in [0, 1], displayed as a percentage
    pub score: f64,
    /// Target profit fraction in [0, 1]
    pub tp_pct: f64,
    /// Per-signal feature snapshot (e.g. ret_5s, vol_spike); optional on the wire
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub features: HashMap<String, f64>,
}

impl Signal {
    /// Score rendered as a display percentage
    pub fn score_percent(&self) -> f64 {
        self.score * 100.0
    }

    /// Target profit rendered as a display percentage
    pub fn tp_percent(&self) -> f64 {
        self.tp_pct * 100.0
    }
}

/// Response envelope for the recent-signals endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsResponse {
    pub signals: Vec<Signal>,
}

/// Masked view of the server-held credential record.
///
/// The unmasked secret is accepted on write and never returned on read;
/// this type carries only previews that are safe to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub has_credentials: bool,
    pub appkey_preview: String,
    pub account_no8_preview: String,
    pub account_prod2_preview: String,
    pub is_paper: bool,
}

/// Locally edited credential record submitted on save.
///
/// `appsecret` is write-only: it is transmitted in full on every save and
/// must be cleared from memory once the server confirms the write.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequest {
    pub appkey: String,
    pub appsecret: String,
    pub account_no8: String,
    pub account_prod2: String,
    pub is_paper: bool,
}

impl CredentialRequest {
    /// All four text fields present; mirrors the browser-native "required" guard
    pub fn is_complete(&self) -> bool {
        !self.appkey.is_empty()
            && !self.appsecret.is_empty()
            && !self.account_no8.is_empty()
            && !self.account_prod2.is_empty()
    }

    /// Drop the secret so it never lingers locally after a confirmed save
    pub fn clear_secret(&mut self) {
        self.appsecret.clear();
    }
}

impl Default for CredentialRequest {
    fn default() -> Self {
        // Paper mode until the server reports the stored mode
        Self {
            appkey: String::new(),
            appsecret: String::new(),
            account_no8: String::new(),
            account_prod2: String::new(),
            is_paper: true,
        }
    }
}

// Manual Debug so the secret never leaks into logs or panic output
impl std::fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("appkey", &self.appkey)
            .field("appsecret", &"<redacted>")
            .field("account_no8", &self.account_no8)
            .field("account_prod2", &self.account_prod2)
            .field("is_paper", &self.is_paper)
            .finish()
    }
}
