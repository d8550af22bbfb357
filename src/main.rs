// workmon server entrypoint
//!
//! The heavy lifting (store bootstrap, server wiring, graceful shutdown)
//! lives in dedicated modules so this file remains a thin orchestrator.

use anyhow::Result;
use log::info;

use workmon::{lifecycle, logging};
use workmon_commons::config::ServerConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config_path = "config.toml";
    let config = match ServerConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: failed to load {}: {}", config_path, e);
            eprintln!("Server cannot start with an invalid configuration");
            std::process::exit(1);
        }
    };

    // Logging before any other side effects
    let server_log_path = format!("{}/server.log", config.logging.logs_path);
    logging::init_logging(
        &config.logging.level,
        &server_log_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("workmon v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Project table: {}", config.storage.excel_path().display());
    info!("Endpoints:");
    info!("  POST /api/projects       - save a scraped project");
    info!("  GET  /api/projects       - list stored projects");
    info!("  GET  /api/projects/{{id}}  - fetch one project");
    info!("  GET  /api/export/excel   - export availability");
    info!("  GET  /api/download/excel - download the spreadsheet");
    info!("  GET  /api/stats          - totals and same-day counts");
    info!("  GET  /api/health         - liveness probe");

    let components = lifecycle::bootstrap(&config)?;
    lifecycle::run(&config, components).await
}
