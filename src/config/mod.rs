//! Configuration management
//!
//! This module handles loading and validation of the service configuration.
//! The signing secret lives under `jwt.secret.key`.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Token signing configuration
    #[serde(default)]
    pub jwt: JwtConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Form login account
    #[serde(default)]
    pub login: LoginConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, using the same
    /// variable names as [`Config::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("JWT_SECRET_KEY") {
            config.jwt.secret.key = key;
        }
        if let Some(lifetime) = lookup("JWT_TOKEN_LIFETIME_SECS") {
            config.jwt.token_lifetime_secs = parse_var("JWT_TOKEN_LIFETIME_SECS", &lifetime)?;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            config.server.port = parse_var("SERVER_PORT", &port)?;
        }
        if let Some(dir) = lookup("SERVER_STATIC_DIR") {
            config.server.static_dir = dir;
        }
        if let Some(username) = lookup("LOGIN_USERNAME") {
            config.login.username = username;
        }
        if let Some(password) = lookup("LOGIN_PASSWORD") {
            config.login.password = Some(password);
        }
        if let Some(role) = lookup("LOGIN_ROLE") {
            config.login.role = parse_var("LOGIN_ROLE", &role)?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &json)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.jwt
            .validate()
            .map_err(|e| ServiceError::config(format!("JWT config error: {}", e)))?;

        self.server
            .validate()
            .map_err(|e| ServiceError::config(format!("Server config error: {}", e)))?;

        self.login
            .validate()
            .map_err(|e| ServiceError::config(format!("Login config error: {}", e)))?;

        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ServiceError::config(format!("Invalid value for {}: {}", name, e)))
}
