//! Error handling for the service
//!
//! This module defines the error type shared by the token service, the
//! configuration layer, and the HTTP host.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
