//! # Hyperswitch Configuration
//!
//! Configuration management for the Hyperswitch integration.
//! All secrets are loaded from environment variables.

use pay_core::PaymentError;
use std::env;
use std::time::Duration;

/// Default API host (sandbox)
pub const DEFAULT_API_BASE_URL: &str = "https://sandbox.hyperswitch.io";

/// Default per-call timeout for outbound requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hyperswitch API configuration
#[derive(Clone)]
pub struct HyperswitchConfig {
    /// Secret API key, sent as the `api-key` header
    pub secret_key: String,

    /// Publishable key, safe to hand to client SDKs
    pub publishable_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Bound on each outbound call, connect through body
    pub timeout: Duration,
}

impl HyperswitchConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `HYPERSWITCH_SECRET_KEY`
    /// - `HYPERSWITCH_PUBLISHABLE_KEY`
    ///
    /// Optional:
    /// - `HYPERSWITCH_API_BASE_URL` (default: sandbox)
    /// - `HYPERSWITCH_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(&lookup, "HYPERSWITCH_SECRET_KEY")?;
        let publishable_key = required(&lookup, "HYPERSWITCH_PUBLISHABLE_KEY")?;

        let api_base_url = lookup("HYPERSWITCH_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout = match lookup("HYPERSWITCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(PaymentError::Configuration(format!(
                        "HYPERSWITCH_TIMEOUT_SECS must be a positive integer, got {:?}",
                        raw
                    )))
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            secret_key,
            publishable_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Check if using sandbox keys
    pub fn is_sandbox(&self) -> bool {
        self.secret_key.starts_with("snd_")
    }

    /// Build a full endpoint URL from a path like `/payments`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the outbound timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for HyperswitchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperswitchConfig")
            .field("secret_key", &"<redacted>")
            .field("publishable_key", &self.publishable_key)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, PaymentError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(PaymentError::Configuration(format!("{} is empty", key))),
        None => Err(PaymentError::Configuration(format!("{} not set", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = HyperswitchConfig::from_lookup(lookup_from(&[
            ("HYPERSWITCH_SECRET_KEY", "snd_abc123"),
            ("HYPERSWITCH_PUBLISHABLE_KEY", "pk_snd_xyz789"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.is_sandbox());
        assert_eq!(
            config.endpoint("/ephemeral_keys"),
            "https://sandbox.hyperswitch.io/ephemeral_keys"
        );
    }

    #[test]
    fn test_from_lookup_missing_secret_key() {
        let result = HyperswitchConfig::from_lookup(lookup_from(&[(
            "HYPERSWITCH_PUBLISHABLE_KEY",
            "pk_snd_xyz789",
        )]));
        assert!(matches!(result, Err(PaymentError::Configuration(msg)) if msg.contains("not set")));
    }

    #[test]
    fn test_from_lookup_empty_secret_key() {
        let result = HyperswitchConfig::from_lookup(lookup_from(&[
            ("HYPERSWITCH_SECRET_KEY", "  "),
            ("HYPERSWITCH_PUBLISHABLE_KEY", "pk_snd_xyz789"),
        ]));
        assert!(matches!(result, Err(PaymentError::Configuration(msg)) if msg.contains("empty")));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = HyperswitchConfig::from_lookup(lookup_from(&[
            ("HYPERSWITCH_SECRET_KEY", "prd_abc"),
            ("HYPERSWITCH_PUBLISHABLE_KEY", "pk_prd_xyz"),
            ("HYPERSWITCH_API_BASE_URL", "https://api.hyperswitch.io/"),
            ("HYPERSWITCH_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert!(!config.is_sandbox());
        assert_eq!(config.api_base_url, "https://api.hyperswitch.io");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        for raw in ["0", "soon", "-1"] {
            let result = HyperswitchConfig::from_lookup(lookup_from(&[
                ("HYPERSWITCH_SECRET_KEY", "snd_abc"),
                ("HYPERSWITCH_PUBLISHABLE_KEY", "pk_snd_xyz"),
                ("HYPERSWITCH_TIMEOUT_SECS", raw),
            ]));
            assert!(result.is_err(), "timeout {:?} should be rejected", raw);
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = HyperswitchConfig::new("snd_very_secret", "pk_snd_public");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("snd_very_secret"));
        assert!(rendered.contains("pk_snd_public"));
    }
}
