//! Listing handler for stored log entries.

use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use canlog_core::AppContext;
use log::error;
use serde_json::json;

use crate::models::FileEntry;

/// GET /files - all stored entries, newest upload first.
///
/// Returns an empty array (not an error) when nothing is stored. Unlike
/// the text endpoints, failures here use the JSON `{"error": ...}` shape.
#[get("/files")]
pub async fn list_files(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    match ctx.repo().list().await {
        Ok(rows) => {
            let entries: Vec<FileEntry> = rows.into_iter().map(FileEntry::from).collect();
            HttpResponse::Ok().json(entries)
        },
        Err(e) => {
            error!("Listing stored files failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        },
    }
}
