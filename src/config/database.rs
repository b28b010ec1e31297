//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// MongoDB configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URI
    pub uri: String,

    /// Database name
    #[serde(default = "default_database_name")]
    pub name: String,

    /// Username, when the deployment requires authentication
    pub username: Option<String>,

    /// Password, when the deployment requires authentication
    pub password: Option<String>,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    #[serde(default = "default_selection_timeout")]
    pub server_selection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get server selection timeout as Duration
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uri.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URI"));
        }
        if !self.uri.starts_with("mongodb://") && !self.uri.starts_with("mongodb+srv://") {
            return Err(ValidationError::InvalidDatabaseUri);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_NAME"));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(ValidationError::IncompleteCredentials);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            name: default_database_name(),
            username: None,
            password: None,
            connect_timeout_secs: default_connect_timeout(),
            server_selection_timeout_secs: default_selection_timeout(),
        }
    }
}

fn default_database_name() -> String {
    "surveys".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_selection_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.name, "surveys");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.server_selection_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_missing_uri() {
        let config = DatabaseConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_uri() {
        let config = DatabaseConfig {
            uri: "postgresql://localhost/test".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_srv_uri_is_accepted() {
        let config = DatabaseConfig {
            uri: "mongodb+srv://cluster0.example.mongodb.net".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_incomplete_credentials() {
        let config = DatabaseConfig {
            uri: "mongodb://localhost:27017".to_string(),
            username: Some("app".to_string()),
            password: None,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = DatabaseConfig {
            uri: "mongodb://localhost:27017".to_string(),
            username: Some("app".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
