//! Service configuration
//!
//! Values are read from `WEBINARS__*` environment variables, e.g.
//! `WEBINARS__SERVER__PORT=8080` or `WEBINARS__DEFAULT_USER_ID=alice`.
//! Database settings stay with [`common::database::DatabaseConfig`].

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address the listener binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration of the webinars service
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Identity acting on requests that carry no user id
    pub default_user_id: String,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(environment())
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3002)?
            .set_default("default_user_id", "test-user")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("WEBINARS").separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: HashMap<String, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::build(environment().source(Some(vars)))
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = from_map(HashMap::new()).unwrap();

        assert_eq!(config.server.address(), "0.0.0.0:3002");
        assert_eq!(config.default_user_id, "test-user");
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            ("WEBINARS__SERVER__PORT".to_string(), "8080".to_string()),
            ("WEBINARS__DEFAULT_USER_ID".to_string(), "alice".to_string()),
        ]);

        let config = from_map(vars).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.default_user_id, "alice");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let vars = HashMap::from([(
            "WEBINARS__SERVER__PORT".to_string(),
            "not-a-port".to_string(),
        )]);

        assert!(from_map(vars).is_err());
    }
}
