//! # Customer-scoped Types
//!
//! Ephemeral keys and payment-method sessions, both requested for a single
//! customer id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body sent to customer-scoped provider endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRequest<'a> {
    pub customer_id: &'a str,
}

/// Short-lived key giving a client SDK access to one customer's data
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EphemeralKey {
    pub secret: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Unix seconds
    #[serde(default)]
    pub expires: Option<i64>,
}

impl EphemeralKey {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// True if the provider reported an expiry that has already passed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

/// Result of `POST /payment_methods` for a customer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentMethodSession {
    pub payment_method_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl PaymentMethodSession {
    /// Customer id reported by the provider, or `requested` if it left it out
    pub fn customer_id_or<'a>(&'a self, requested: &'a str) -> &'a str {
        self.customer_id.as_deref().unwrap_or(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_customer_request_body() {
        let body = serde_json::to_value(CustomerRequest {
            customer_id: "hyperswitch_sdk_demo_id",
        })
        .unwrap();
        assert_eq!(body, json!({ "customer_id": "hyperswitch_sdk_demo_id" }));
    }

    #[test]
    fn test_ephemeral_key_timestamps() {
        let key: EphemeralKey = serde_json::from_value(json!({
            "id": "eki_1",
            "customer_id": "cus_1",
            "created_at": 1_700_000_000,
            "expires": 1_700_003_600,
            "secret": "epk_abc"
        }))
        .unwrap();

        let created = key.created_at().unwrap();
        let expires = key.expires_at().unwrap();
        assert_eq!(expires - created, Duration::hours(1));
        assert!(key.is_expired(expires));
        assert!(!key.is_expired(created));
    }

    #[test]
    fn test_ephemeral_key_without_expiry_never_expires() {
        let key: EphemeralKey = serde_json::from_value(json!({ "secret": "ek_456" })).unwrap();
        assert!(key.expires_at().is_none());
        assert!(!key.is_expired(Utc::now()));
    }

    #[test]
    fn test_payment_method_customer_fallback() {
        let session: PaymentMethodSession = serde_json::from_value(json!({
            "payment_method_id": "pm_1",
            "client_secret": "pm_1_secret"
        }))
        .unwrap();
        assert_eq!(session.customer_id_or("cus_req"), "cus_req");

        let session = PaymentMethodSession {
            customer_id: Some("cus_resp".into()),
            ..session
        };
        assert_eq!(session.customer_id_or("cus_req"), "cus_resp");
    }
}
