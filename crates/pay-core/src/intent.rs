//! # Payment Intent Types
//!
//! Input schema for payment-intent creation and the subset of the
//! provider's response the proxy cares about.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// When the provider captures funds after authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    Manual,
    ManualMultiple,
    Scheduled,
}

/// Whether the payment should go through 3DS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationType {
    ThreeDs,
    NoThreeDs,
}

/// How the payment method may be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutureUsage {
    OnSession,
    OffSession,
}

/// A line of the order being paid for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub product_name: String,
    pub quantity: u32,
    /// Amount in minor units
    pub amount: i64,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166 alpha-2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Phone number split the way the provider expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    pub country_code: String,
}

/// Shipping or billing details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// Request body for creating a payment intent.
///
/// Serializes to the provider's `POST /payments` body. Absent optionals are
/// omitted so the provider applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Amount in minor units (cents)
    pub amount: i64,

    /// ISO 4217 currency code, upper case
    pub currency: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_details: Vec<OrderDetail>,

    #[serde(default)]
    pub confirm: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<FutureUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_external_three_ds_authentication: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<AddressDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<AddressDetails>,

    /// Connector-specific passthrough, forwarded untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_metadata: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl PaymentIntentRequest {
    /// Create a minimal request for `amount` minor units of `currency`
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            order_details: Vec::new(),
            confirm: false,
            capture_method: None,
            authentication_type: None,
            setup_future_usage: None,
            request_external_three_ds_authentication: None,
            email: None,
            description: None,
            profile_id: None,
            shipping: None,
            billing: None,
            connector_metadata: None,
            metadata: HashMap::new(),
            customer_id: None,
        }
    }

    /// Builder: set the customer
    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Check the request before it is forwarded to the provider
    pub fn validate(&self) -> PaymentResult<()> {
        if self.amount <= 0 {
            return Err(PaymentError::InvalidRequest(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }

        if !is_currency_code(&self.currency) {
            return Err(PaymentError::InvalidRequest(format!(
                "currency must be a three-letter upper-case ISO 4217 code, got {:?}",
                self.currency
            )));
        }

        if let Some(customer_id) = &self.customer_id {
            if customer_id.trim().is_empty() {
                return Err(PaymentError::InvalidRequest(
                    "customer_id must not be blank".to_string(),
                ));
            }
        }

        for detail in &self.order_details {
            if detail.quantity == 0 {
                return Err(PaymentError::InvalidRequest(format!(
                    "order line {:?} has zero quantity",
                    detail.product_name
                )));
            }
            if detail.amount < 0 {
                return Err(PaymentError::InvalidRequest(format!(
                    "order line {:?} has a negative amount",
                    detail.product_name
                )));
            }
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(PaymentError::InvalidRequest(format!(
                    "email {:?} is not an address",
                    email
                )));
            }
        }

        Ok(())
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Payment intent as returned by the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentIntent {
    /// Secret handed to the client SDK to confirm the payment
    pub client_secret: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usd(amount: i64) -> PaymentIntentRequest {
        PaymentIntentRequest::new(amount, "USD")
    }

    #[test]
    fn test_validate_accepts_minimal_request() {
        assert!(usd(6500).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_amount_and_currency() {
        assert!(matches!(
            usd(0).validate(),
            Err(PaymentError::InvalidRequest(_))
        ));
        assert!(usd(-10).validate().is_err());
        assert!(PaymentIntentRequest::new(100, "usd").validate().is_err());
        assert!(PaymentIntentRequest::new(100, "US").validate().is_err());
        assert!(PaymentIntentRequest::new(100, "USDX").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_customer_and_bad_lines() {
        assert!(usd(100).with_customer("  ").validate().is_err());

        let mut zero_qty = usd(100);
        zero_qty.order_details.push(OrderDetail {
            product_name: "Widget".into(),
            quantity: 0,
            amount: 100,
        });
        assert!(zero_qty.validate().is_err());

        let mut bad_email = usd(100);
        bad_email.email = Some("not-an-email".into());
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let request = usd(6500).with_customer("cus_1");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "amount": 6500,
                "currency": "USD",
                "confirm": false,
                "customer_id": "cus_1"
            })
        );
    }

    #[test]
    fn test_enum_wire_names() {
        let mut request = usd(100);
        request.capture_method = Some(CaptureMethod::ManualMultiple);
        request.authentication_type = Some(AuthenticationType::ThreeDs);
        request.setup_future_usage = Some(FutureUsage::OnSession);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["capture_method"], "manual_multiple");
        assert_eq!(value["authentication_type"], "three_ds");
        assert_eq!(value["setup_future_usage"], "on_session");
    }

    #[test]
    fn test_payment_intent_tolerates_sparse_response() {
        let intent: PaymentIntent =
            serde_json::from_value(json!({ "client_secret": "pi_123_secret_abc" })).unwrap();
        assert_eq!(intent.client_secret, "pi_123_secret_abc");
        assert!(intent.payment_id.is_none());

        let missing: Result<PaymentIntent, _> = serde_json::from_value(json!({ "status": "x" }));
        assert!(missing.is_err());
    }
}
