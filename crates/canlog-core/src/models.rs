//! Persisted entities and query projections.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One stored upload record.
///
/// Rows are created by the upload endpoint and never updated in place;
/// `id` and `uploaded_at` are assigned by the storage engine on insert.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntry {
    pub id: i64,
    /// Client-supplied name; not unique, may contain path separators.
    pub filename: String,
    /// Full decoded file body (UTF-8 text).
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
}

/// List projection of [`LogEntry`] without the content payload.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntrySummary {
    pub id: i64,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Filename + content pair, the input shape of the export assembler.
#[derive(Debug, Clone, FromRow)]
pub struct LogContent {
    pub filename: String,
    pub content: String,
}
