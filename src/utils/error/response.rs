//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingToken | ServiceError::Token(_) | ServiceError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::LoginRequired => StatusCode::FOUND,
            ServiceError::Validation(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            ServiceError::LoginRequired => {
                return HttpResponse::Found()
                    .insert_header((header::LOCATION, "/login"))
                    .finish();
            }
            // Rejection reasons stay in the logs
            ServiceError::MissingToken | ServiceError::Token(_) | ServiceError::Unauthorized(_) => {
                ("UNAUTHENTICATED", "Authentication required".to_string())
            }
            ServiceError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            ServiceError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            ServiceError::Config(_) => ("CONFIG_ERROR", "Service misconfigured".to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
