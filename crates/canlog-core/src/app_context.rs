//! Shared per-process state handed to every HTTP handler.

use std::path::{Path, PathBuf};

use sqlx::mysql::MySqlPool;

use crate::db::repo::LogRepository;

/// Application-wide context: the connection pool and the shared export
/// scratch directory. Shared across workers behind an `Arc`.
pub struct AppContext {
    pool: MySqlPool,
    export_dir: PathBuf,
}

impl AppContext {
    pub fn new(pool: MySqlPool, export_dir: PathBuf) -> Self {
        Self { pool, export_dir }
    }

    /// Repository handle over the shared pool.
    pub fn repo(&self) -> LogRepository {
        LogRepository::new(self.pool.clone())
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
