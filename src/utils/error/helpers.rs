//! Helper functions for creating specific error types

use super::types::ServiceError;

impl ServiceError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// True for every error that should be answered as "not authenticated"
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::Token(_) | Self::Unauthorized(_) | Self::LoginRequired
        )
    }
}
