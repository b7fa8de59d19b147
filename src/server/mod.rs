//! HTTP server implementation
//!
//! Hosts the form login and guards every non-public route with the
//! bearer-token middleware.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::run_server;
pub use server::HttpServer;
pub use state::{AppState, LoginCredentials};
