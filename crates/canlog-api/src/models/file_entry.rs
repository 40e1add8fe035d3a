//! Listing response model
//!
//! One row of the `/files` response.
//!
//! # Example
//! ```json
//! {
//!   "id": 3,
//!   "filename": "a.log",
//!   "uploaded_at": "2026-08-07 10:15:00"
//! }
//! ```

use canlog_core::models::LogEntrySummary;
use serde::{Deserialize, Serialize};

/// One stored entry as reported by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Storage-assigned identifier
    pub id: i64,

    /// Client-supplied filename (not guaranteed unique)
    pub filename: String,

    /// Insertion timestamp, formatted `YYYY-MM-DD HH:MM:SS`
    pub uploaded_at: String,
}

impl From<LogEntrySummary> for FileEntry {
    fn from(row: LogEntrySummary) -> Self {
        Self {
            id: row.id,
            filename: row.filename,
            uploaded_at: row.uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_uploaded_at_without_subseconds() {
        let row = LogEntrySummary {
            id: 7,
            filename: "a.log".to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2026, 8, 7, 10, 15, 0).unwrap(),
        };
        let entry = FileEntry::from(row);
        assert_eq!(entry.id, 7);
        assert_eq!(entry.uploaded_at, "2026-08-07 10:15:00");
    }
}
