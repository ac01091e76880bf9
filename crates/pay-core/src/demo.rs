//! # Demo Profile
//!
//! Default customer and payment-intent template used when a caller does not
//! supply its own input. The built-in values mirror the Hyperswitch SDK demo;
//! deployments can override them with a TOML file.

use crate::error::{PaymentError, PaymentResult};
use crate::intent::{
    Address, AddressDetails, AuthenticationType, CaptureMethod, FutureUsage, OrderDetail,
    PaymentIntentRequest, Phone,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Customer id used by the Hyperswitch SDK demo apps
pub const DEMO_CUSTOMER_ID: &str = "hyperswitch_sdk_demo_id";

/// Defaults for the GET endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoProfile {
    /// Customer used for ephemeral keys and payment methods
    pub customer_id: String,

    /// Template for `GET /create-payment-intent`
    pub payment_intent: PaymentIntentRequest,
}

impl DemoProfile {
    /// Parse a profile from TOML and check it is usable
    pub fn from_toml(content: &str) -> PaymentResult<Self> {
        let profile: DemoProfile = toml::from_str(content)
            .map_err(|e| PaymentError::Configuration(format!("Invalid demo profile: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    /// A profile whose template would be rejected is a configuration error
    pub fn validate(&self) -> PaymentResult<()> {
        if self.customer_id.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "demo customer_id must not be blank".to_string(),
            ));
        }
        self.payment_intent
            .validate()
            .map_err(|e| PaymentError::Configuration(format!("demo payment_intent: {}", e)))
    }

    /// Payment-intent template, filled with the demo customer if it has none
    pub fn payment_intent(&self) -> PaymentIntentRequest {
        let mut request = self.payment_intent.clone();
        if request.customer_id.is_none() {
            request.customer_id = Some(self.customer_id.clone());
        }
        request
    }
}

impl Default for DemoProfile {
    fn default() -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("udf1".to_string(), "value1".to_string());
        metadata.insert("new_customer".to_string(), "true".to_string());
        metadata.insert("login_date".to_string(), "2019-09-10T10:11:12Z".to_string());

        let payment_intent = PaymentIntentRequest {
            amount: 6500,
            currency: "USD".to_string(),
            order_details: vec![OrderDetail {
                product_name: "Apple iphone 15".to_string(),
                quantity: 1,
                amount: 6500,
            }],
            confirm: false,
            capture_method: Some(CaptureMethod::Automatic),
            authentication_type: Some(AuthenticationType::ThreeDs),
            setup_future_usage: Some(FutureUsage::OnSession),
            request_external_three_ds_authentication: Some(false),
            email: Some("user@gmail.com".to_string()),
            description: Some("Hello this is description".to_string()),
            profile_id: Some("pro_E6k4XxWE3fVzTIYDMzJa".to_string()),
            shipping: Some(AddressDetails {
                address: Some(Address {
                    line1: Some("sdsdfsdf".to_string()),
                    line2: Some("hsgdbhd".to_string()),
                    line3: Some("alsksoe".to_string()),
                    city: Some("Banglore".to_string()),
                    state: Some("California".to_string()),
                    zip: Some("571201".to_string()),
                    country: Some("US".to_string()),
                    first_name: Some("John".to_string()),
                    last_name: Some("Doe".to_string()),
                }),
                phone: Some(Phone {
                    number: "123456789".to_string(),
                    country_code: "+1".to_string(),
                }),
            }),
            billing: Some(AddressDetails {
                address: Some(Address {
                    line1: Some("1467".to_string()),
                    line2: Some("Harrison Street".to_string()),
                    line3: Some("Harrison Street".to_string()),
                    city: Some("San Fransico".to_string()),
                    state: Some("California".to_string()),
                    zip: Some("94122".to_string()),
                    country: Some("US".to_string()),
                    first_name: Some("joseph".to_string()),
                    last_name: Some("Doe".to_string()),
                }),
                phone: Some(Phone {
                    number: "8056594427".to_string(),
                    country_code: "+91".to_string(),
                }),
            }),
            connector_metadata: Some(serde_json::json!({
                "noon": { "order_category": "applepay" }
            })),
            metadata,
            customer_id: Some(DEMO_CUSTOMER_ID.to_string()),
        };

        Self {
            customer_id: DEMO_CUSTOMER_ID.to_string(),
            payment_intent,
        }
    }
}
