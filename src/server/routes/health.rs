//! Health check endpoint

use actix_web::HttpResponse;
use serde_json::json;
use tracing::debug;

/// Basic health check endpoint
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
