//! # Hyperswitch REST Client
//!
//! `PaymentGateway` implementation over the Hyperswitch REST API.
//! Every call is a single JSON POST authenticated with the `api-key` header.

use crate::config::HyperswitchConfig;
use async_trait::async_trait;
use chrono::Utc;
use pay_core::{
    CustomerRequest, EphemeralKey, PaymentError, PaymentGateway, PaymentIntent,
    PaymentIntentRequest, PaymentMethodSession, PaymentResult,
};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, instrument};

const PAYMENTS_PATH: &str = "/payments";
const EPHEMERAL_KEYS_PATH: &str = "/ephemeral_keys";
const PAYMENT_METHODS_PATH: &str = "/payment_methods";

/// Hyperswitch API client
pub struct HyperswitchClient {
    config: HyperswitchConfig,
    client: Client,
}

impl HyperswitchClient {
    /// Create a new client. The configured timeout bounds every call.
    pub fn new(config: HyperswitchConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = HyperswitchConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &HyperswitchConfig {
        &self.config
    }

    /// POST `body` to `path` and decode a 2xx JSON response into `R`.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> PaymentResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.secret_key)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(path, e))?;

        if !status.is_success() {
            error!("Hyperswitch API error: path={}, status={}, body={}", path, status, body);
            return Err(PaymentError::UpstreamRejected {
                status: status.as_u16(),
                message: rejection_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::UpstreamMalformed(format!(
                "Failed to parse Hyperswitch response from {}: {}",
                path, e
            ))
        })
    }
}

#[async_trait]
impl PaymentGateway for HyperswitchClient {
    #[instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency))]
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> PaymentResult<PaymentIntent> {
        let intent: PaymentIntent = self.post_json(PAYMENTS_PATH, request).await?;
        require_field(PAYMENTS_PATH, "client_secret", &intent.client_secret)?;

        info!(
            "Created Hyperswitch payment: id={:?}, status={:?}",
            intent.payment_id, intent.status
        );

        Ok(intent)
    }

    #[instrument(skip(self))]
    async fn create_ephemeral_key(&self, customer_id: &str) -> PaymentResult<EphemeralKey> {
        let key: EphemeralKey = self
            .post_json(EPHEMERAL_KEYS_PATH, &CustomerRequest { customer_id })
            .await?;
        require_field(EPHEMERAL_KEYS_PATH, "secret", &key.secret)?;

        if key.is_expired(Utc::now()) {
            return Err(PaymentError::UpstreamMalformed(format!(
                "Ephemeral key from {} already expired at {:?}",
                EPHEMERAL_KEYS_PATH,
                key.expires_at()
            )));
        }

        info!("Created ephemeral key: id={:?}, expires={:?}", key.id, key.expires_at());

        Ok(key)
    }

    #[instrument(skip(self))]
    async fn create_payment_method(
        &self,
        customer_id: &str,
    ) -> PaymentResult<PaymentMethodSession> {
        let session: PaymentMethodSession = self
            .post_json(PAYMENT_METHODS_PATH, &CustomerRequest { customer_id })
            .await?;
        require_field(PAYMENT_METHODS_PATH, "payment_method_id", &session.payment_method_id)?;
        require_field(PAYMENT_METHODS_PATH, "client_secret", &session.client_secret)?;

        info!("Created payment method: id={}", session.payment_method_id);

        Ok(session)
    }

    fn provider_name(&self) -> &'static str {
        "hyperswitch"
    }
}

/// Classify a reqwest failure that happened before a status was read
fn transport_error(path: &str, err: reqwest::Error) -> PaymentError {
    if err.is_timeout() {
        PaymentError::UpstreamUnavailable(format!("Request to {} timed out", path))
    } else if err.is_connect() {
        PaymentError::UpstreamUnavailable(format!("Could not connect for {}: {}", path, err))
    } else {
        PaymentError::UpstreamUnavailable(err.to_string())
    }
}

/// A decoded field the client SDKs need must not be blank
fn require_field(path: &str, field: &str, value: &str) -> PaymentResult<()> {
    if value.trim().is_empty() {
        error!("Hyperswitch response from {} has blank {}", path, field);
        return Err(PaymentError::UpstreamMalformed(format!(
            "Hyperswitch response from {} has blank {}",
            path, field
        )));
    }
    Ok(())
}

/// Pull a human-readable message out of a non-2xx body.
///
/// Hyperswitch nests errors as `{"error": {"message": ...}}`; some proxies and
/// older endpoints answer `{"error": "..."}` or `{"message": "..."}`.
fn rejection_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

    let message = parsed.as_ref().and_then(|value| {
        match value.get("error") {
            Some(serde_json::Value::String(msg)) => Some(msg.clone()),
            Some(err) => err
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            None => None,
        }
        .or_else(|| value.get("message").and_then(|m| m.as_str()).map(String::from))
    });

    match message {
        Some(msg) if !msg.trim().is_empty() => msg,
        _ => format!("HTTP {}", status),
    }
}
