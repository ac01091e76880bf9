//! # pay-api
//!
//! HTTP API layer for the Hyperswitch demo proxy.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Proxy endpoints for the Hyperswitch client SDKs
//! - Static asset serving for the demo frontend
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/create-payment-intent` | Payment intent from the demo template |
//! | POST | `/create-payment-intent` | Payment intent from a JSON body |
//! | GET | `/create-ephemeral-key` | Ephemeral key for the demo customer |
//! | GET | `/payment_methods` | Payment-method session for the demo customer |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
