//! Test fixtures
//!
//! Real token services on a virtual clock; nothing here is mocked.

use bearer_gate::{Config, JwtConfig, ManualClock, Role, TokenService};
use std::sync::Arc;

/// base64("0123456789ABCDEF0123456789ABCDEF")
pub const SECRET: &str = "MDEyMzQ1Njc4OUFCQ0RFRjAxMjM0NTY3ODlBQkNERUY=";

/// base64("FEDCBA9876543210FEDCBA9876543210")
pub const OTHER_SECRET: &str = "RkVEQ0JBOTg3NjU0MzIxMEZFRENCQTk4NzY1NDMyMTA=";

/// Fixed mint instant
pub const T0: u64 = 1_700_000_000;

/// Token service keyed with [`SECRET`] whose clock starts at `now`
pub fn token_service_at(now: u64) -> (TokenService, Arc<ManualClock>) {
    token_service_with(SECRET, now)
}

/// Token service keyed with `secret` whose clock starts at `now`
pub fn token_service_with(secret: &str, now: u64) -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(now));
    let service = TokenService::with_clock(&JwtConfig::with_secret(secret), clock.clone())
        .expect("fixture secret must load");
    (service, clock)
}

/// Configuration with a known login account
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.jwt = JwtConfig::with_secret(SECRET);
    config.login.username = "alice".to_string();
    config.login.password = Some("wonderland".to_string());
    config.login.role = Role::User;
    config
}
