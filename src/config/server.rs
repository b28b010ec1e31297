//! HTTP server settings.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Deployment environment the service runs in.
///
/// Gates development conveniences: ANSI-colored logs and the permissive
/// CORS fallback are disabled in production.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Settings for the HTTP listener and request middleware.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Log filter directive; `RUST_LOG` wins when set.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allowed CORS origins.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: Environment::default(),
            log_level: "info,survey_api=debug".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Whether an empty origin list may fall back to permissive CORS.
    /// Production deployments must list their origins explicitly.
    pub fn allow_permissive_cors(&self) -> bool {
        !self.is_production()
    }

    /// Parsed `cors_origins`, trimmed, empty when unset.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|origins| origins.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
