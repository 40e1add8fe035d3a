//! Upload handler
//!
//! Accepts a multipart batch of text log files and stores each file as one
//! row. Rows inserted before a failing file stay in place: the batch has
//! no atomicity guarantee, matching the auto-commit-per-row storage
//! contract.

use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use canlog_core::{AppContext, CanLogError, LogRepository};
use futures_util::TryStreamExt;
use log::{debug, error};

use super::failure_status;

/// One part of the multipart payload: client filename plus raw bytes.
struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

/// Drain every `files` field from the multipart stream. Parts under any
/// other field name are ignored.
async fn collect_files(payload: &mut Multipart) -> Result<Vec<UploadedFile>, CanLogError> {
    let mut files = Vec::new();
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| CanLogError::InvalidInput(format!("malformed multipart payload: {}", e)))?
    {
        if field.name() != Some("files") {
            continue;
        }
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();
        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| CanLogError::InvalidInput(format!("malformed multipart payload: {}", e)))?
        {
            data.extend_from_slice(&chunk);
        }
        files.push(UploadedFile { filename, data });
    }
    Ok(files)
}

/// Decode each file as UTF-8 text and insert it as one row. Stops at the
/// first failing file.
async fn store_files(repo: &LogRepository, files: Vec<UploadedFile>) -> Result<(), CanLogError> {
    for file in files {
        let content = String::from_utf8(file.data)?;
        let id = repo.insert(&file.filename, &content).await?;
        debug!("Stored '{}' as log entry {}", file.filename, id);
    }
    Ok(())
}

/// POST /upload - store one or more text log files.
///
/// Expects multipart form data with one part per file under the field name
/// `files`. An empty batch is a client error.
#[post("/upload")]
pub async fn upload(mut payload: Multipart, ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    let files = match collect_files(&mut payload).await {
        Ok(files) => files,
        Err(e) => {
            error!("Upload rejected: {}", e);
            return HttpResponse::build(failure_status(&e)).body(format!("Upload failed: {}", e));
        },
    };

    if files.is_empty() {
        return HttpResponse::BadRequest().body("No files received!");
    }

    match store_files(&ctx.repo(), files).await {
        Ok(()) => HttpResponse::Ok().body("Uploaded and saved to MySQL successfully!"),
        Err(e) => {
            error!("Upload failed: {}", e);
            HttpResponse::build(failure_status(&e)).body(format!("Upload failed: {}", e))
        },
    }
}
