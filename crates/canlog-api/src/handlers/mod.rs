//! HTTP handlers for the canlog REST API
//!
//! One module per endpoint family. Every handler acquires what it needs
//! from the shared [`AppContext`], performs a single storage round trip
//! (plus local file I/O for downloads), and maps the domain `Result` onto
//! an HTTP response.

mod delete;
mod download;
#[path = "health.rs"]
mod health_mod;
mod list;
#[path = "upload.rs"]
mod upload_mod;

pub use delete::{delete_all, delete_by_id};
pub use download::{download_all, download_by_id};
pub use health_mod::health;
pub use list::list_files;
pub use upload_mod::upload;

use actix_web::http::StatusCode;
use canlog_core::CanLogError;

/// Map a domain error to the HTTP status the endpoint reports.
///
/// Anything that is not a client mistake or a missing row is a server
/// failure whose message is exposed verbatim in the response body.
pub(crate) fn failure_status(err: &CanLogError) -> StatusCode {
    match err {
        CanLogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CanLogError::NotFound(_) => StatusCode::NOT_FOUND,
        CanLogError::Database(_)
        | CanLogError::Io(_)
        | CanLogError::Archive(_)
        | CanLogError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
