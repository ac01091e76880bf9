//! # pay-core
//!
//! Core types and traits for the Hyperswitch demo proxy.
//!
//! This crate provides:
//! - `PaymentGateway` trait for the outbound payment provider
//! - `PaymentIntentRequest` input schema and its validation
//! - `EphemeralKey` and `PaymentMethodSession` customer-scoped results
//! - `DemoProfile` defaults for callers that send no input
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{DemoProfile, PaymentGateway};
//!
//! let request = DemoProfile::default().payment_intent();
//! request.validate()?;
//!
//! let intent = gateway.create_payment_intent(&request).await?;
//! // Hand intent.client_secret to the client SDK
//! ```

pub mod customer;
pub mod demo;
pub mod error;
pub mod gateway;
pub mod intent;

// Re-exports for convenience
pub use customer::{CustomerRequest, EphemeralKey, PaymentMethodSession};
pub use demo::{DemoProfile, DEMO_CUSTOMER_ID};
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use intent::{
    Address, AddressDetails, AuthenticationType, CaptureMethod, FutureUsage, OrderDetail,
    PaymentIntent, PaymentIntentRequest, Phone,
};
