//! # bearer-gate
//!
//! Stateless authentication for web applications with signed JWT bearer
//! tokens.
//!
//! ## Features
//!
//! - **Key Loader**: HS256 signing key derived from a base64 secret
//! - **Minter**: compact tokens carrying subject, role and expiry
//! - **Transport**: tokens handed to browsers in an `Authorization` cookie
//! - **Reader**: header/cookie extraction, signature and expiry checks
//! - **Server**: form login plus an actix-web guard for every other route
//!
//! ## Minting and validating
//!
//! ```rust,no_run
//! use bearer_gate::{JwtConfig, Role, TokenService};
//!
//! fn main() -> bearer_gate::Result<()> {
//!     let config = JwtConfig::with_secret("MDEyMzQ1Njc4OUFCQ0RFRjAxMjM0NTY3ODlBQkNERUY=");
//!     let tokens = TokenService::new(&config)?;
//!
//!     let header_value = tokens.mint("alice", Role::Admin)?;
//!     let token = TokenService::strip_prefix(&header_value)?;
//!     assert!(tokens.validate(token));
//!     assert_eq!(tokens.claims(token)?.sub, "alice");
//!     Ok(())
//! }
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use bearer_gate::{Config, run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/bearer-gate.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{
    Claims, Clock, ManualClock, Role, SigningKey, SystemClock, TokenRejection, TokenService,
};
pub use config::{Config, JwtConfig};
pub use server::{AppState, HttpServer, run_server};
pub use utils::error::{Result, ServiceError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
