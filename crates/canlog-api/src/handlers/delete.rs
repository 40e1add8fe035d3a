//! Delete handlers: purge all entries or one entry by id.

use std::sync::Arc;

use actix_web::{delete, web, HttpResponse, Responder};
use canlog_core::AppContext;
use log::{error, info};

use super::failure_status;

/// DELETE /delete - remove every stored entry unconditionally.
#[delete("/delete")]
pub async fn delete_all(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    match ctx.repo().delete_all().await {
        Ok(count) => {
            info!("Deleted {} stored log entries", count);
            HttpResponse::Ok().body("All records deleted from MySQL.")
        },
        Err(e) => {
            error!("Delete of all records failed: {}", e);
            HttpResponse::build(failure_status(&e)).body(format!("Delete failed: {}", e))
        },
    }
}

/// DELETE /delete/{id} - remove one entry.
///
/// No existence check: deleting an absent id affects zero rows and still
/// reports success with the id echoed back.
#[delete("/delete/{id}")]
pub async fn delete_by_id(
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = path.into_inner();
    match ctx.repo().delete_by_id(id).await {
        Ok(affected) => {
            info!("Delete of log entry {} affected {} row(s)", id, affected);
            HttpResponse::Ok().body(format!("Deleted file with ID {}", id))
        },
        Err(e) => {
            error!("Delete of log entry {} failed: {}", id, e);
            HttpResponse::build(failure_status(&e)).body(format!("Delete failed: {}", e))
        },
    }
}
