//! Table bootstrap for the `can_logs` schema.

use sqlx::mysql::MySqlPool;

use crate::error::Result;

/// DDL for the single table this service owns.
///
/// `id` is auto-assigned and never reused after deletion; `uploaded_at`
/// defaults to the insertion time on the server side.
pub const CREATE_CAN_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS can_logs (
    id INT AUTO_INCREMENT PRIMARY KEY,
    filename VARCHAR(255),
    content LONGTEXT,
    uploaded_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Create the schema if it does not exist yet.
///
/// Runs on a connection checked out for exactly this call; the connection
/// goes back to the pool before the function returns.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_CAN_LOGS).execute(&mut *conn).await?;
    Ok(())
}
