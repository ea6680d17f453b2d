//! Startup configuration for the relay.

use derive_getters::Getters;
use journal_guru_error::ConfigError;
use journal_guru_models::{AnthropicConfig, DEFAULT_ANTHROPIC_ENDPOINT};
use std::time::Duration;
use tracing::warn;

/// Key substituted when placeholder mode is enabled and no real key is set.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Relay settings, read once at startup and never mutated.
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RelayConfig {
    /// Bind host
    #[builder(default = "\"127.0.0.1\".to_string()")]
    host: String,
    /// Bind port
    #[builder(default = "3001")]
    port: u16,
    /// Provider credential
    api_key: String,
    /// Provider base URL
    #[builder(default = "DEFAULT_ANTHROPIC_ENDPOINT.to_string()")]
    anthropic_endpoint: String,
    /// Optional bound on each outbound call
    #[builder(default)]
    upstream_timeout: Option<Duration>,
}

impl RelayConfig {
    /// Returns a builder for constructing a RelayConfig.
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `ANTHROPIC_API_KEY` (required unless placeholder mode is on)
    /// - `ANTHROPIC_BASE_URL` (default: "https://api.anthropic.com")
    /// - `JOURNAL_GURU_HOST` (default: "127.0.0.1")
    /// - `JOURNAL_GURU_PORT` (default: 3001)
    /// - `UPSTREAM_TIMEOUT_SECS` (optional)
    /// - `JOURNAL_GURU_ALLOW_PLACEHOLDER_KEY` (optional, `1`, `true` or `yes`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let allow_placeholder = present("JOURNAL_GURU_ALLOW_PLACEHOLDER_KEY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let api_key = match present("ANTHROPIC_API_KEY") {
            Some(key) => key,
            None if allow_placeholder => {
                warn!(
                    "ANTHROPIC_API_KEY not set; using placeholder key, generation calls will fail upstream"
                );
                PLACEHOLDER_API_KEY.to_string()
            }
            None => return Err(ConfigError::missing_var("ANTHROPIC_API_KEY")),
        };

        let port = match present("JOURNAL_GURU_PORT") {
            Some(raw) => raw.trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid_var("JOURNAL_GURU_PORT", &raw, e))?,
            None => 3001,
        };

        let upstream_timeout = match present("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::invalid_var("UPSTREAM_TIMEOUT_SECS", &raw, e))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            host: present("JOURNAL_GURU_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            api_key,
            anthropic_endpoint: present("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_ENDPOINT.to_string()),
            upstream_timeout,
        })
    }

    /// Uses a different bind address.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when running on the placeholder credential.
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }

    /// Provider connection settings derived from this config.
    pub fn anthropic_config(&self) -> Result<AnthropicConfig, ConfigError> {
        AnthropicConfig::builder()
            .api_key(self.api_key.clone())
            .endpoint(self.anthropic_endpoint.clone())
            .timeout(self.upstream_timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid provider config: {}", e)))
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("anthropic_endpoint", &self.anthropic_endpoint)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}
