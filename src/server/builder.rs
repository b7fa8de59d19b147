//! Server startup

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting bearer-gate");

    let server = HttpServer::new(&config)?;
    info!("Server starting at: http://{}", config.server.address());
    info!("Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /login  - Sign-in form");
    info!("   POST /login  - Sign in, sets the Authorization cookie");
    info!("   POST /logout - Sign out");
    info!("   GET  /       - Home (authenticated)");
    info!("   GET  /api/me - Token claims (authenticated)");

    server.start().await
}
