//! Configuration models
//!
//! One file per configuration section.

pub mod jwt;
pub mod logging;
pub mod login;
pub mod server;

pub use jwt::*;
pub use logging::*;
pub use login::*;
pub use server::*;
