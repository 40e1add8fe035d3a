//! Download handlers
//!
//! ## Export Flow
//! 1. Read the requested content from storage
//! 2. Materialize it under the shared export directory
//!    (see `canlog_core::export` for collision and stale-file semantics)
//! 3. Return the materialized bytes as a download attachment

use std::fs;
use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use canlog_core::{export, AppContext, CanLogError};
use log::{error, info};

use super::failure_status;

/// Build an attachment response around materialized bytes.
fn attachment(name: &str, content_type: &str, bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .append_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", name),
        ))
        .body(bytes)
}

async fn bulk_archive(ctx: &AppContext) -> Result<(String, Vec<u8>), CanLogError> {
    let rows = ctx.repo().fetch_all_contents().await?;
    let archive_path = export::bundle_csv_exports(ctx.export_dir(), &rows)?;
    let bytes = fs::read(&archive_path)?;
    let name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((name, bytes))
}

/// GET /download - bundle every stored entry into a zip attachment.
#[get("/download")]
pub async fn download_all(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    match bulk_archive(&ctx).await {
        Ok((name, bytes)) => {
            info!("Bulk export ready: {} ({} bytes)", name, bytes.len());
            attachment(&name, "application/zip", bytes)
        },
        Err(e) => {
            error!("Bulk download failed: {}", e);
            HttpResponse::build(failure_status(&e)).body(format!("Download failed: {}", e))
        },
    }
}

async fn single_export(ctx: &AppContext, id: i64) -> Result<(String, Vec<u8>), CanLogError> {
    let entry = ctx
        .repo()
        .fetch(id)
        .await?
        .ok_or_else(|| CanLogError::NotFound(format!("log entry {}", id)))?;

    // No forced `.csv` suffix for single downloads; the sanitized client
    // filename is used as-is.
    let name = export::derive_export_name(&entry.filename, false);
    let path = export::write_export_file(ctx.export_dir(), &name, &entry.content)?;
    let bytes = fs::read(&path)?;
    Ok((name, bytes))
}

/// GET /download/{id} - export one stored entry as a file attachment.
#[get("/download/{id}")]
pub async fn download_by_id(
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = path.into_inner();
    match single_export(&ctx, id).await {
        Ok((name, bytes)) => attachment(&name, "application/octet-stream", bytes),
        Err(e) => {
            let status = failure_status(&e);
            if matches!(e, CanLogError::NotFound(_)) {
                return HttpResponse::build(status).body("File not found.");
            }
            error!("Download of log entry {} failed: {}", id, e);
            HttpResponse::build(status).body(format!("Download failed: {}", e))
        },
    }
}
