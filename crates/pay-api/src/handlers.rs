//! # Request Handlers
//!
//! Axum request handlers for the proxy endpoints.
//! Each handler makes exactly one gateway call and relays a fixed subset of
//! the result; any failure becomes `{"error": {"message": ...}}`.

use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{PaymentError, PaymentIntentRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Optional overrides for `GET /create-payment-intent`
#[derive(Debug, Default, Deserialize)]
pub struct PaymentIntentQuery {
    /// Amount in minor units
    #[serde(default)]
    pub amount: Option<i64>,
    /// Currency code (case-insensitive)
    #[serde(default)]
    pub currency: Option<String>,
    /// Customer to attach the payment to
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl PaymentIntentQuery {
    /// Apply the overrides on top of a template
    pub fn apply(self, mut request: PaymentIntentRequest) -> PaymentIntentRequest {
        if let Some(amount) = self.amount {
            request.amount = amount;
        }
        if let Some(currency) = self.currency {
            request.currency = currency.to_ascii_uppercase();
        }
        if let Some(customer_id) = self.customer_id {
            request.customer_id = Some(customer_id);
        }
        request
    }
}

/// Create payment intent response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub publishable_key: String,
    pub client_secret: String,
}

/// Create ephemeral key response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemeralKeyResponse {
    pub ephemeral_key: String,
}

/// Payment methods response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    pub customer_id: String,
    pub payment_method_id: String,
    pub client_secret: String,
    pub publishable_key: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

fn payment_error_to_response(err: PaymentError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.client_message())))
}

/// Log a failed operation with its kind, then map it to a response
fn gateway_failure(operation: &str, err: PaymentError) -> ApiError {
    error!(
        kind = err.kind(),
        retryable = err.is_retryable(),
        "{} failed: {}",
        operation,
        err
    );
    payment_error_to_response(err)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hyperswitch-proxy",
        "provider": state.provider(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Create a payment intent from the demo template (query overrides allowed)
#[instrument(skip(state, query), fields(request_id = %Uuid::new_v4()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    query: Result<Query<PaymentIntentQuery>, QueryRejection>,
) -> ApiResult<PaymentIntentResponse> {
    let Query(overrides) = query.map_err(|e| {
        gateway_failure(
            "create-payment-intent",
            PaymentError::InvalidRequest(e.body_text()),
        )
    })?;

    let request = overrides.apply(state.demo.payment_intent());
    submit_payment_intent(&state, request).await
}

/// Create a payment intent from an explicit JSON body
#[instrument(skip(state, body), fields(request_id = %Uuid::new_v4()))]
pub async fn create_payment_intent_from_body(
    State(state): State<AppState>,
    body: Result<Json<PaymentIntentRequest>, JsonRejection>,
) -> ApiResult<PaymentIntentResponse> {
    let Json(request) = body.map_err(|e| {
        gateway_failure(
            "create-payment-intent",
            PaymentError::InvalidRequest(e.body_text()),
        )
    })?;

    submit_payment_intent(&state, request).await
}

/// Shared payment-intent path: validate, forward once, relay the secret
async fn submit_payment_intent(
    state: &AppState,
    request: PaymentIntentRequest,
) -> ApiResult<PaymentIntentResponse> {
    request
        .validate()
        .map_err(|e| gateway_failure("create-payment-intent", e))?;

    info!(
        "Creating payment intent: amount={}, currency={}, customer={:?}",
        request.amount, request.currency, request.customer_id
    );

    let intent = state
        .gateway
        .create_payment_intent(&request)
        .await
        .map_err(|e| gateway_failure("create-payment-intent", e))?;

    Ok(Json(PaymentIntentResponse {
        publishable_key: state.publishable_key.to_string(),
        client_secret: intent.client_secret,
    }))
}

/// Create an ephemeral key for the demo customer
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
pub async fn create_ephemeral_key(
    State(state): State<AppState>,
) -> ApiResult<EphemeralKeyResponse> {
    let customer_id = state.demo.customer_id.as_str();

    let key = state
        .gateway
        .create_ephemeral_key(customer_id)
        .await
        .map_err(|e| gateway_failure("create-ephemeral-key", e))?;

    Ok(Json(EphemeralKeyResponse {
        ephemeral_key: key.secret,
    }))
}

/// Start a payment-method session for the demo customer
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> ApiResult<PaymentMethodsResponse> {
    let requested = state.demo.customer_id.as_str();

    let session = state
        .gateway
        .create_payment_method(requested)
        .await
        .map_err(|e| gateway_failure("payment_methods", e))?;

    Ok(Json(PaymentMethodsResponse {
        customer_id: session.customer_id_or(requested).to_string(),
        payment_method_id: session.payment_method_id,
        client_secret: session.client_secret,
        publishable_key: state.publishable_key.to_string(),
    }))
}
