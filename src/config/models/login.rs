//! Form login configuration

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// The single account accepted by the form login
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_username")]
    pub username: String,
    /// Generated at startup when absent
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: None,
            role: Role::default(),
        }
    }
}

impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("role", &self.role)
            .finish()
    }
}

impl LoginConfig {
    /// Validate the section
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("login.username cannot be empty".to_string());
        }

        if matches!(&self.password, Some(password) if password.is_empty()) {
            return Err("login.password cannot be empty when set".to_string());
        }

        Ok(())
    }
}

fn default_username() -> String {
    "user".to_string()
}
