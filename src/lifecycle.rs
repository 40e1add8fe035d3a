//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting otherwise done directly in
//! `main.rs`: bootstrapping the database connection, wiring the HTTP
//! server, and coordinating graceful shutdown.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use canlog_core::db::{self, schema};
use canlog_core::AppContext;
use log::{debug, info};

use crate::config::ServerConfig;
use crate::middleware;

/// Connect to MySQL and make sure the `can_logs` schema exists.
///
/// Both steps are fatal on failure: the service must not accept traffic
/// without a reachable database and an existing table. Schema creation
/// checks a connection out of the pool and returns it immediately after
/// the statement runs.
pub async fn bootstrap(config: &ServerConfig) -> Result<Arc<AppContext>> {
    let pool = db::connect(&config.database)
        .await
        .with_context(|| format!("failed to connect to MySQL at {}", config.database.host))?;
    info!("Connected to MySQL at {}", config.database.host);

    schema::ensure_schema(&pool)
        .await
        .context("failed to ensure can_logs schema")?;
    debug!("can_logs schema ensured");

    Ok(Arc::new(AppContext::new(pool, config.export.dir.clone())))
}

/// Run the HTTP server until it exits or a termination signal arrives.
pub async fn run(config: &ServerConfig, ctx: Arc<AppContext>) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let ctx_for_app = ctx.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors())
            .app_data(web::Data::new(ctx_for_app.clone()))
            .configure(canlog_api::routes::configure)
    })
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}", bind_addr))?
    .run();

    info!("Listening on http://{}", bind_addr);

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            result.context("HTTP server task failed")??;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
            server_handle.stop(true).await;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
