//! # pay-hyperswitch
//!
//! Hyperswitch payment gateway for the demo proxy.
//!
//! `HyperswitchClient` implements `pay_core::PaymentGateway` over three
//! endpoints of the Hyperswitch REST API:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `create_payment_intent` | `POST /payments` |
//! | `create_ephemeral_key` | `POST /ephemeral_keys` |
//! | `create_payment_method` | `POST /payment_methods` |
//!
//! Failures are classified into the upstream kinds of `PaymentError`:
//! transport failures and timeouts become `UpstreamUnavailable`, non-2xx
//! statuses become `UpstreamRejected`, and undecodable 2xx bodies become
//! `UpstreamMalformed`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_hyperswitch::HyperswitchClient;
//! use pay_core::PaymentGateway;
//!
//! let client = HyperswitchClient::from_env()?;
//! let key = client.create_ephemeral_key("hyperswitch_sdk_demo_id").await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::HyperswitchClient;
pub use config::{HyperswitchConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT};
