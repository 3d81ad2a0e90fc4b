//! Signal gateway with graceful degradation
//!
//! Retrieves the most recent surge signals from the backend. Any failure -
//! unreachable backend, non-success status, malformed payload - folds into a
//! fixed placeholder list at the boundary, so the dashboard is never empty
//! during backend downtime or local development. Single attempt, no retries:
//! the fallback already satisfies the "never empty" requirement, and a retry
//! would only delay first paint.

use std::collections::HashMap;

use crate::client::BackendClient;
use crate::error::Result;
use crate::types::{Signal, SignalsResponse};

/// Number of signals the dashboard asks for on mount
pub const DEFAULT_SIGNAL_LIMIT: usize = 5;

/// Read-side gateway for the recent-signals endpoint
#[derive(Debug, Clone)]
pub struct SignalGateway {
    client: BackendClient,
}

impl SignalGateway {
    /// Create a gateway over an existing backend client
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch up to `limit` recent signals, in server order.
    ///
    /// Never fails: errors are logged and replaced by [`fallback_signals`].
    pub async fn fetch_recent(&self, limit: usize) -> Vec<Signal> {
        match self.try_fetch_recent(limit).await {
            Ok(signals) => signals,
            Err(err) => {
                tracing::warn!(error = %err, "signal fetch failed, serving fallback list");
                fallback_signals()
            }
        }
    }

    async fn try_fetch_recent(&self, limit: usize) -> Result<Vec<Signal>> {
        let path = format!("/api/signals/recent?limit={limit}");
        let response: SignalsResponse = self.client.get(&path).await?;

        // Server owns the ordering; the length bound is enforced here
        let mut signals = response.signals;
        signals.truncate(limit);
        Ok(signals)
    }
}

/// Deterministic placeholder signals shown while the backend is unreachable
pub fn fallback_signals() -> Vec<Signal> {
    [("AAPL", 0.72, 0.05), ("TSLA", 0.65, 0.06), ("NVDA", 0.81, 0.05)]
        .into_iter()
        .map(|(symbol, score, tp_pct)| Signal {
            symbol: symbol.to_string(),
            score,
            tp_pct,
            features: HashMap::new(),
        })
        .collect()
}
