//! Single-file static assets

use crate::server::state::AppState;
use actix_files::NamedFile;
use actix_web::web;
use std::path::Path;

/// Serve `favicon.ico` from the static root
pub async fn favicon(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = Path::new(&state.config.server.static_dir).join("favicon.ico");
    Ok(NamedFile::open_async(path).await?)
}
