//! API routes
//!
//! Route table for the form login, the protected pages, and static assets.

pub mod assets;
pub mod health;
pub mod home;
pub mod login;

use actix_files::Files;
use actix_web::web;
use std::path::Path;

/// Directories under the static root served anonymously
const STATIC_DIRS: &[&str] = &["css", "js", "images", "webjars"];

/// Configure application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/login")
                .route(web::get().to(login::login_page))
                .route(web::post().to(login::login)),
        )
        .service(
            web::resource("/logout")
                .route(web::get().to(login::logout))
                .route(web::post().to(login::logout)),
        )
        .route("/", web::get().to(home::index))
        .route("/api/me", web::get().to(home::me))
        .route("/favicon.ico", web::get().to(assets::favicon));
}

/// Mount static asset directories found under `static_dir`
pub fn configure_static(cfg: &mut web::ServiceConfig, static_dir: &str) {
    for dir in STATIC_DIRS {
        cfg.service(Files::new(&format!("/{}", dir), Path::new(static_dir).join(dir)));
    }
}
