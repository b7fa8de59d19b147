//! Error types for the service

use crate::auth::jwt::TokenRejection;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors, fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signing failures while minting a token
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// No bearer credential on the request
    #[error("Not Found Token")]
    MissingToken,

    /// A presented token failed verification
    #[error("{0}")]
    Token(#[from] TokenRejection),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Browser request without credentials, answered with a redirect
    #[error("Login required")]
    LoginRequired,

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
