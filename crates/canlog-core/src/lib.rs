// canlog Core Library
//
// This crate owns everything below the HTTP surface: the shared error
// type, the MySQL pool and repository, the export assembler, and the
// application context handed to request handlers.

pub mod app_context;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use app_context::AppContext;
pub use db::repo::LogRepository;
pub use error::{CanLogError, Result};
