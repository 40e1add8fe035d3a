// canlog Server entrypoint
//!
//! The heavy lifting (configuration, logging setup, bootstrap, graceful
//! shutdown) lives in dedicated modules so this file remains a thin
//! orchestrator.

use anyhow::Result;
use canlog_server::config::ServerConfig;
use canlog_server::{lifecycle, logging};
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // Configuration comes entirely from the process environment
    let config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            eprintln!("Server cannot start without valid configuration");
            std::process::exit(1);
        },
    };

    // Logging before any other side effects
    logging::init_logging(&config.logging.level)?;

    info!("canlog server v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);
    info!(
        "Database: {}@{}/{}",
        config.database.user, config.database.host, config.database.database
    );
    info!("Export directory: {}", config.export.dir.display());

    // Connect and ensure the schema before accepting any traffic
    let ctx = lifecycle::bootstrap(&config).await?;

    // Run the HTTP server until termination signal is received
    lifecycle::run(&config, ctx).await
}
