//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Default token lifetime: 60 minutes
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// Token signing configuration, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret, addressed as `jwt.secret.key`
    #[serde(default)]
    pub secret: JwtSecret,
    /// Token lifetime in seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: JwtSecret::default(),
            token_lifetime_secs: default_token_lifetime(),
        }
    }
}

impl JwtConfig {
    /// Config with the given base64 secret and the default lifetime
    pub fn with_secret<S: Into<String>>(key: S) -> Self {
        Self {
            secret: JwtSecret { key: key.into() },
            ..Self::default()
        }
    }

    /// Validate the section
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.key.trim().is_empty() {
            return Err("jwt.secret.key is missing or empty".to_string());
        }

        if self.token_lifetime_secs == 0 {
            return Err("jwt.token_lifetime_secs must be greater than 0".to_string());
        }

        if self.token_lifetime_secs > 86400 * 30 {
            return Err("jwt.token_lifetime_secs should not exceed 30 days".to_string());
        }

        Ok(())
    }
}

/// Base64-encoded HMAC secret
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct JwtSecret {
    #[serde(default)]
    pub key: String,
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSecret")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

fn default_token_lifetime() -> u64 {
    DEFAULT_TOKEN_LIFETIME_SECS
}
