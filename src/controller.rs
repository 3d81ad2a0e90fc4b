//! Dashboard controller
//!
//! Owns the interactive dashboard state and drives it through the submit
//! state machine. Transitions are pure synchronous methods on
//! [`DashboardState`], so the re-entrant submit flow is testable without a
//! backend; network effects live only in the orchestration methods of
//! [`DashboardController`].

use crate::client::BackendClient;
use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::error::Error;
use crate::signals::{DEFAULT_SIGNAL_LIMIT, SignalGateway};
use crate::types::{CredentialRequest, CredentialStatus, Signal};

/// Inline message after a confirmed save
pub const SAVE_SUCCESS_MESSAGE: &str = "Credentials saved securely.";
/// Inline message after a failed save; the form is retained for retry
pub const SAVE_FAILURE_MESSAGE: &str = "Saving failed. Check the details and try again.";

/// Credential-form submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Interactive dashboard state
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Signals currently on display
    pub signals: Vec<Signal>,
    /// Client-side trading toggle; a UI affordance for a control loop owned
    /// elsewhere, never touches the network here
    pub trading_enabled: bool,
    /// Credential form as the operator edits it
    pub form: CredentialRequest,
    /// Masked status of the server-held record, if known
    pub stored: Option<CredentialStatus>,
    /// Submit state machine position
    pub submit: SubmitState,
    /// Inline status message for the credential form
    pub message: Option<String>,
    /// Operator has flipped paper/live manually; a late status fetch must
    /// not overwrite it (last write wins)
    paper_touched: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
            trading_enabled: true,
            form: CredentialRequest::default(),
            stored: None,
            submit: SubmitState::Idle,
            message: None,
            paper_touched: false,
        }
    }

    /// Flip the trading toggle. Synchronous and purely local.
    pub fn toggle_trading(&mut self) {
        self.trading_enabled = !self.trading_enabled;
    }

    /// Replace the displayed signal list
    pub fn set_signals(&mut self, signals: Vec<Signal>) {
        self.signals = signals;
    }

    /// Apply a status fetch result. Seeds the form's paper/live mode from the
    /// server - the client never invents that value - unless the operator
    /// already toggled it.
    pub fn apply_status(&mut self, status: Option<CredentialStatus>) {
        if let Some(status) = status {
            if !self.paper_touched {
                self.form.is_paper = status.is_paper;
            }
            self.stored = Some(status);
        }
    }

    /// Operator flipped the paper/live checkbox
    pub fn set_paper_mode(&mut self, is_paper: bool) {
        self.form.is_paper = is_paper;
        self.paper_touched = true;
    }

    /// Try to enter `Submitting`. Rejects an incomplete form (the
    /// browser-native "required" guard) and a submit already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submit == SubmitState::Submitting || !self.form.is_complete() {
            return false;
        }
        self.submit = SubmitState::Submitting;
        self.message = None;
        true
    }

    /// Fold a save outcome back into the state machine.
    ///
    /// Success clears the in-memory secret and takes the server's status as
    /// authoritative; failure keeps every field, secret included, so the
    /// operator can retry without retyping.
    pub fn finish_submit(&mut self, outcome: Result<CredentialStatus, Error>) {
        match outcome {
            Ok(status) => {
                self.form.clear_secret();
                self.stored = Some(status);
                self.submit = SubmitState::Succeeded;
                self.message = Some(SAVE_SUCCESS_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "credential submit failed");
                self.submit = SubmitState::Failed;
                self.message = Some(SAVE_FAILURE_MESSAGE.to_string());
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wires the gateways to the state machine. One instance per dashboard view.
#[derive(Debug)]
pub struct DashboardController {
    signals: SignalGateway,
    credentials: CredentialStore,
    pub state: DashboardState,
}

impl DashboardController {
    /// Build a controller and its gateways from configuration
    pub fn new(config: &Config) -> Self {
        let client = BackendClient::new(config);
        Self {
            signals: SignalGateway::new(client.clone()),
            credentials: CredentialStore::new(client),
            state: DashboardState::new(),
        }
    }

    /// Mount-time load. Both reads run concurrently and populate their own
    /// slice of state; neither outcome affects the other.
    pub async fn mount(&mut self) {
        let (signals, status) = futures::join!(
            self.signals.fetch_recent(DEFAULT_SIGNAL_LIMIT),
            self.credentials.fetch_status(),
        );
        self.state.set_signals(signals);
        self.state.apply_status(status);
    }

    /// Submit the credential form, returning the resulting submit state.
    /// Re-entrant from `Succeeded` and `Failed`; a no-op if the guard rejects.
    pub async fn submit(&mut self) -> SubmitState {
        if !self.state.begin_submit() {
            return self.state.submit;
        }

        let outcome = self.credentials.save(&self.state.form).await;
        self.state.finish_submit(outcome);
        self.state.submit
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::{get, post};

    use super::*;
    use crate::testutil::{dead_backend_url, spawn_backend};

    fn complete_form() -> CredentialRequest {
        CredentialRequest {
            appkey: "K1".to_string(),
            appsecret: "S1".to_string(),
            account_no8: "12345678".to_string(),
            account_prod2: "01".to_string(),
            is_paper: true,
        }
    }

    fn echo_status() -> serde_json::Value {
        serde_json::json!({
            "has_credentials": true,
            "appkey_preview": "K1***",
            "account_no8_preview": "1234****",
            "account_prod2_preview": "01",
            "is_paper": true,
        })
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = DashboardState::new();
        assert!(state.trading_enabled);

        state.toggle_trading();
        assert!(!state.trading_enabled);
        state.toggle_trading();
        assert!(state.trading_enabled);
    }

    #[test]
    fn test_incomplete_form_blocks_submit() {
        let mut state = DashboardState::new();
        assert!(!state.begin_submit());
        assert_eq!(state.submit, SubmitState::Idle);
    }

    #[test]
    fn test_submit_in_flight_blocks_reentry() {
        let mut state = DashboardState::new();
        state.form = complete_form();

        assert!(state.begin_submit());
        assert_eq!(state.submit, SubmitState::Submitting);
        assert!(!state.begin_submit());
    }

    #[test]
    fn test_resubmit_after_terminal_states() {
        let mut state = DashboardState::new();
        state.form = complete_form();

        assert!(state.begin_submit());
        state.finish_submit(Err(Error::Http { status: 500 }.into_save_failed()));
        assert_eq!(state.submit, SubmitState::Failed);

        // Secret retained for retry, then re-entry is allowed
        assert_eq!(state.form.appsecret, "S1");
        assert!(state.begin_submit());
    }

    #[test]
    fn test_success_clears_secret_and_takes_server_status() {
        let mut state = DashboardState::new();
        state.form = complete_form();
        state.form.is_paper = false; // operator submitted live mode

        assert!(state.begin_submit());
        let status: CredentialStatus =
            serde_json::from_value(echo_status()).expect("status decodes");
        state.finish_submit(Ok(status));

        assert_eq!(state.submit, SubmitState::Succeeded);
        assert_eq!(state.form.appsecret, "");
        assert_eq!(state.message.as_deref(), Some(SAVE_SUCCESS_MESSAGE));
        // Server is authoritative for the displayed mode
        let stored = state.stored.expect("status displayed");
        assert!(stored.is_paper);
        assert_eq!(stored.appkey_preview, "K1***");
    }

    #[test]
    fn test_status_seeds_paper_mode() {
        let mut state = DashboardState::new();
        let mut status: CredentialStatus =
            serde_json::from_value(echo_status()).expect("status decodes");
        status.is_paper = false;

        state.apply_status(Some(status));
        assert!(!state.form.is_paper);
    }

    #[test]
    fn test_manual_toggle_wins_over_late_status() {
        let mut state = DashboardState::new();
        state.set_paper_mode(false);

        // Status arrives after the operator already flipped the checkbox
        let status: CredentialStatus =
            serde_json::from_value(echo_status()).expect("status decodes");
        state.apply_status(Some(status));

        assert!(!state.form.is_paper);
        assert!(state.stored.is_some());
    }

    #[test]
    fn test_absent_status_changes_nothing() {
        let mut state = DashboardState::new();
        state.apply_status(None);
        assert!(state.stored.is_none());
        assert!(state.form.is_paper);
    }

    #[tokio::test]
    async fn test_mount_with_backend_down_degrades_quietly() {
        let mut controller =
            DashboardController::new(&Config::with_backend_url(dead_backend_url().await));
        controller.mount().await;

        // Dashboard still renders: three fallback signals, empty status panel
        assert_eq!(controller.state.signals, crate::signals::fallback_signals());
        assert!(controller.state.stored.is_none());
        assert_eq!(controller.state.submit, SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_mount_populates_both_slices() {
        let router = axum::Router::new()
            .route(
                "/api/signals/recent",
                get(|| async {
                    Json(serde_json::json!({ "signals": [
                        { "symbol": "AAPL", "score": 0.72, "tp_pct": 0.05 },
                    ]}))
                }),
            )
            .route("/api/admin/kis/credentials", get(|| async { Json(echo_status()) }));
        let base = spawn_backend(router).await;

        let mut controller = DashboardController::new(&Config::with_backend_url(base));
        controller.mount().await;

        assert_eq!(controller.state.signals.len(), 1);
        assert_eq!(controller.state.signals[0].symbol, "AAPL");
        assert!(controller.state.stored.as_ref().is_some_and(|s| s.has_credentials));
        assert!(controller.state.form.is_paper); // seeded from the server
    }

    #[tokio::test]
    async fn test_submit_flow_against_echoing_backend() {
        let router = axum::Router::new().route(
            "/api/admin/kis/credentials",
            post(|| async { Json(echo_status()) }),
        );
        let base = spawn_backend(router).await;

        let mut controller = DashboardController::new(&Config::with_backend_url(base));
        controller.state.form = complete_form();

        let result = controller.submit().await;
        assert_eq!(result, SubmitState::Succeeded);
        assert_eq!(controller.state.form.appsecret, "");
        assert_eq!(controller.state.message.as_deref(), Some(SAVE_SUCCESS_MESSAGE));
        let stored = controller.state.stored.as_ref().expect("status displayed");
        assert_eq!(stored.account_no8_preview, "1234****");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_secret_for_retry() {
        let router = axum::Router::new().route(
            "/api/admin/kis/credentials",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = spawn_backend(router).await;

        let mut controller = DashboardController::new(&Config::with_backend_url(base));
        controller.state.form = complete_form();

        let result = controller.submit().await;
        assert_eq!(result, SubmitState::Failed);
        assert_eq!(controller.state.form.appsecret, "S1");
        assert_eq!(controller.state.message.as_deref(), Some(SAVE_FAILURE_MESSAGE));
        assert!(controller.state.stored.is_none());
    }

    #[tokio::test]
    async fn test_blocked_submit_makes_no_network_call() {
        // Dead address: any attempted call would fail, but the guard fires first
        let mut controller =
            DashboardController::new(&Config::with_backend_url(dead_backend_url().await));

        let result = controller.submit().await;
        assert_eq!(result, SubmitState::Idle);
        assert!(controller.state.message.is_none());
    }
}
