//! Database layer for canlog
//!
//! MySQL access built on a bounded `sqlx` pool:
//! - [`schema`]: table bootstrap (create-if-absent)
//! - [`repo`]: repository holding every SQL statement the service issues

pub mod repo;
pub mod schema;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::error::Result;

/// Upper bound on pooled connections. Each request checks out at most one
/// connection at a time, so this also caps concurrent database work.
const MAX_POOL_CONNECTIONS: u32 = 10;

/// Connection settings for the backing MySQL database.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbSettings {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Open a bounded connection pool against the configured database.
///
/// Fails if the database is unreachable; callers treat that as fatal at
/// startup. Requests later check connections out of this pool and return
/// them on completion, which keeps per-request use exclusive.
pub async fn connect(settings: &DbSettings) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_POOL_CONNECTIONS)
        .connect_with(settings.connect_options())
        .await?;
    Ok(pool)
}
