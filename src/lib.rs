//! Surge Dashboard - client gateway layer for the surge radar trading service
//!
//! The browser dashboard shows surge signals and lets an operator store
//! brokerage API credentials for the backend trading service. This crate is
//! the part with a real contract: the gateways and the state machine behind
//! that page.
//!
//! # Architecture
//! - [`SignalGateway`] fetches recent signals and degrades to a fixed
//!   fallback list instead of surfacing errors
//! - [`CredentialStore`] reads the masked credential status and submits
//!   write-only credential saves
//! - [`DashboardController`] owns the interactive state and orchestrates
//!   both gateways on mount and on submit
//!
//! # Error policy
//! Reads never fail upward: signals fold into the fallback list, status into
//! `None`. Only `save` propagates, as [`Error::SaveFailed`], which the
//! controller converts into an inline message while keeping the typed secret
//! for retry.

mod client;
mod config;
mod controller;
mod credentials;
mod error;
mod signals;
#[cfg(test)]
mod testutil;
mod types;

pub use client::BackendClient;
pub use config::{Config, DEFAULT_BACKEND_URL};
pub use controller::{
    DashboardController, DashboardState, SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE, SubmitState,
};
pub use credentials::CredentialStore;
pub use error::{Error, Result};
pub use signals::{DEFAULT_SIGNAL_LIMIT, SignalGateway, fallback_signals};
pub use types::{CredentialRequest, CredentialStatus, Signal, SignalsResponse};
