//! # Routes
//!
//! Axum router configuration for the proxy.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /create-payment-intent - Payment intent from the demo template
/// - POST /create-payment-intent - Payment intent from a JSON body
/// - GET  /create-ephemeral-key  - Ephemeral key for the demo customer
/// - GET  /payment_methods       - Payment-method session for the demo customer
/// - GET  /health                - Health check
///
/// Anything else is served from the static directory.
pub fn create_router(state: AppState) -> Router {
    // Client SDK demos run from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(
            "/create-payment-intent",
            get(handlers::create_payment_intent).post(handlers::create_payment_intent_from_body),
        )
        .route("/create-ephemeral-key", get(handlers::create_ephemeral_key))
        .route("/payment_methods", get(handlers::list_payment_methods))
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
