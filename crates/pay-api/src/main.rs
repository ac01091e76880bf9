//! # Hyperswitch Proxy
//!
//! Demo backend for the Hyperswitch client SDKs.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export HYPERSWITCH_SECRET_KEY=snd_...
//! export HYPERSWITCH_PUBLISHABLE_KEY=pk_snd_...
//!
//! # Optional
//! export HYPERSWITCH_TIMEOUT_SECS=10
//! export PORT=5252
//! export LOG_FORMAT=json
//!
//! # Run the server
//! hyperswitch-proxy
//! ```

use pay_api::{routes, state::AppState};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (LOG_FORMAT=json for structured output)
    let fmt_layer = if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Refuse to start without credentials; the error exits non-zero
    let state = AppState::from_env().map_err(|e| {
        error!("Startup failed: {:#}", e);
        e
    })?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider());
    info!("Demo customer: {}", state.demo.customer_id);
    info!("Static assets: {}", state.config.static_dir.display());

    let app = routes::create_router(state);

    info!("Hyperswitch proxy listening on http://{}", addr);

    if !is_prod {
        info!("Payment intent: GET http://{}/create-payment-intent", addr);
        info!("Ephemeral key:  GET http://{}/create-ephemeral-key", addr);
        info!("Payment methods: GET http://{}/payment_methods", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Hyperswitch Proxy
  ━━━━━━━━━━━━━━━━━━━━━━━
  SDK demo backend
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
