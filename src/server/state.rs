//! Application state shared across HTTP handlers

use crate::auth::{Role, TokenService};
use crate::config::{Config, LoginConfig};
use crate::utils::error::Result;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Token service
    pub tokens: Arc<TokenService>,
    /// Account accepted by the form login
    pub login: Arc<LoginCredentials>,
}

impl AppState {
    /// Build state from configuration; fails if the signing key cannot be loaded
    pub fn new(config: Config) -> Result<Self> {
        let tokens = TokenService::new(&config.jwt)?;
        Ok(Self::with_token_service(config, tokens))
    }

    /// Build state around an existing token service
    pub fn with_token_service(config: Config, tokens: TokenService) -> Self {
        let login = LoginCredentials::from_config(&config.login);

        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            login: Arc::new(login),
        }
    }
}

/// The single account accepted by `POST /login`
#[derive(Clone)]
pub struct LoginCredentials {
    pub username: String,
    password: String,
    pub role: Role,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl LoginCredentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Use the configured password, or generate one and log it once
    pub fn from_config(config: &LoginConfig) -> Self {
        let password = match &config.password {
            Some(password) => password.clone(),
            None => {
                let generated = generate_password();
                warn!(
                    "\n\nUsing generated security password: {}\n\n\
                     This generated password is for development use only.\n",
                    generated
                );
                generated
            }
        };

        info!(
            "Form login enabled for user '{}' with role {}",
            config.username, config.role
        );
        Self::new(config.username.clone(), password, config.role)
    }

    /// Password bytes are compared in constant time
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let password_ok = constant_time_eq(&self.password, password);
        self.username == username && password_ok
    }
}

fn constant_time_eq(expected: &str, provided: &str) -> bool {
    let expected = expected.as_bytes();
    let provided = provided.as_bytes();
    if expected.len() != provided.len() {
        // Same work on a length mismatch
        let _ = expected.ct_eq(expected);
        return false;
    }
    expected.ct_eq(provided).into()
}

fn generate_password() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
