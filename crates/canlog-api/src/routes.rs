//! API routes configuration
//!
//! This module registers all HTTP routes for the canlog service:
//! - GET /health - Liveness probe
//! - POST /upload - Store uploaded log files (multipart field `files`)
//! - GET /files - JSON listing of stored entries
//! - GET /download - Bulk zip export of all entries
//! - GET /download/{id} - Single-entry file export
//! - DELETE /delete - Remove all entries
//! - DELETE /delete/{id} - Remove one entry

use actix_web::web;

use crate::handlers;

/// Configure API routes for canlog
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health)
        .service(handlers::upload)
        .service(handlers::list_files)
        .service(handlers::download_all)
        .service(handlers::download_by_id)
        .service(handlers::delete_all)
        .service(handlers::delete_by_id);
}
