//! Database repository layer
//!
//! Query and mutation operations over the `can_logs` table. Handlers
//! construct a [`LogRepository`] from the shared pool and call one method
//! per storage round trip; every operation auto-commits.

use sqlx::mysql::MySqlPool;

use crate::error::Result;
use crate::models::{LogContent, LogEntry, LogEntrySummary};

/// Repository over the `can_logs` table.
#[derive(Clone)]
pub struct LogRepository {
    pool: MySqlPool,
}

impl LogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert one uploaded file; the storage engine assigns `id` and
    /// `uploaded_at`. Returns the assigned id.
    pub async fn insert(&self, filename: &str, content: &str) -> Result<u64> {
        let result = sqlx::query("INSERT INTO can_logs (filename, content) VALUES (?, ?)")
            .bind(filename)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    /// All entries without content payloads, newest upload first.
    pub async fn list(&self) -> Result<Vec<LogEntrySummary>> {
        let rows = sqlx::query_as::<_, LogEntrySummary>(
            "SELECT id, filename, uploaded_at FROM can_logs ORDER BY uploaded_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Filename + content for every entry (bulk export source).
    pub async fn fetch_all_contents(&self) -> Result<Vec<LogContent>> {
        let rows = sqlx::query_as::<_, LogContent>("SELECT filename, content FROM can_logs")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Look up a single entry by id.
    pub async fn fetch(&self, id: i64) -> Result<Option<LogEntry>> {
        let row = sqlx::query_as::<_, LogEntry>(
            "SELECT id, filename, content, uploaded_at FROM can_logs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Remove every entry. Returns the number of rows deleted.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM can_logs").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Remove the entry with the given id, if present. Deleting an absent
    /// id affects zero rows and is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM can_logs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
