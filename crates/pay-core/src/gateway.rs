//! # Payment Gateway Trait
//!
//! The seam between the HTTP layer and the payment provider. Handlers only
//! see this trait, so tests can swap the real client for an in-memory double.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           PaymentGateway (trait)             │
//! │  ├── create_payment_intent()                 │
//! │  ├── create_ephemeral_key()                  │
//! │  └── create_payment_method()                 │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴─────────┐      ┌────────┴───────┐
//!  │HyperswitchClient│      │  test doubles  │
//!  └─────────────────┘      └────────────────┘
//! ```

use crate::customer::{EphemeralKey, PaymentMethodSession};
use crate::error::PaymentResult;
use crate::intent::{PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Outbound operations against a payment provider.
///
/// Each call makes exactly one attempt. Implementations must classify
/// failures into the `PaymentError` upstream kinds rather than passing raw
/// transport errors through.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent. The request is expected to be validated.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> PaymentResult<PaymentIntent>;

    /// Create an ephemeral key for `customer_id`.
    async fn create_ephemeral_key(&self, customer_id: &str) -> PaymentResult<EphemeralKey>;

    /// Start a payment-method session for `customer_id`.
    async fn create_payment_method(
        &self,
        customer_id: &str,
    ) -> PaymentResult<PaymentMethodSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
