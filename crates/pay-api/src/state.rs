//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment gateway, the publishable key, and the demo profile.
//! Nothing in here is mutated after startup.

use pay_core::{BoxedPaymentGateway, DemoProfile};
use pay_hyperswitch::HyperswitchClient;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Port the demo clients expect
pub const DEFAULT_PORT: u16 = 5252;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served for non-API paths
    pub static_dir: PathBuf,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./dist")),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("./dist"),
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Outbound payment provider
    pub gateway: BoxedPaymentGateway,
    /// Publishable key returned to clients alongside secrets
    pub publishable_key: Arc<str>,
    /// Defaults for requests that carry no input
    pub demo: Arc<DemoProfile>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Assemble state from already-built parts
    pub fn new(
        gateway: BoxedPaymentGateway,
        publishable_key: impl Into<Arc<str>>,
        demo: DemoProfile,
        config: AppConfig,
    ) -> Self {
        Self {
            gateway,
            publishable_key: publishable_key.into(),
            demo: Arc::new(demo),
            config,
        }
    }

    /// Build state from the environment.
    ///
    /// Fails when either Hyperswitch key is missing or empty, or when the demo
    /// profile file exists but is invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let client = HyperswitchClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Hyperswitch client: {}", e))?;
        let publishable_key = client.config().publishable_key.clone();

        if client.config().is_sandbox() {
            tracing::info!("Using Hyperswitch sandbox keys");
        } else {
            tracing::warn!("Using live Hyperswitch keys");
        }

        let demo = load_demo_profile()?;

        Ok(Self::new(
            Arc::new(client) as BoxedPaymentGateway,
            publishable_key,
            demo,
            config,
        ))
    }

    /// Provider name of the configured gateway
    pub fn provider(&self) -> &'static str {
        self.gateway.provider_name()
    }
}

/// Load the demo profile from `DEMO_PROFILE` or `config/demo.toml`
fn load_demo_profile() -> anyhow::Result<DemoProfile> {
    if let Ok(path) = std::env::var("DEMO_PROFILE") {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
        let profile = DemoProfile::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
        tracing::info!("Loaded demo profile from {}", path);
        return Ok(profile);
    }

    let config_paths = [
        "config/demo.toml",
        "../config/demo.toml",
        "../../config/demo.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let profile = DemoProfile::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded demo profile from {}", path);
            return Ok(profile);
        }
    }

    tracing::warn!("No demo profile found, using built-in defaults");
    Ok(DemoProfile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5252);
        assert!(!config.is_production());
        assert_eq!(config.static_dir, PathBuf::from("./dist"));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_repo_demo_profile_parses() {
        let content = include_str!("../../../config/demo.toml");
        let profile = DemoProfile::from_toml(content).unwrap();
        assert_eq!(profile, DemoProfile::default());
    }
}
