//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting kept out of `main.rs`:
//! bootstrapping the store, wiring the HTTP server, and coordinating
//! graceful shutdown.

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use log::info;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use workmon_api::routes;
use workmon_commons::config::ServerConfig;
use workmon_store::ProjectStore;

use crate::middleware;

/// Aggregated application components shared across the HTTP server and
/// shutdown handling.
pub struct ApplicationComponents {
    pub store: Arc<ProjectStore>,
}

/// Initialize the data directory and the project store.
pub fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    std::fs::create_dir_all(config.storage.data_dir())?;

    let store = Arc::new(ProjectStore::new(config.storage.excel_path()));
    store.ensure_initialized()?;
    info!("Project table ready at {}", store.path().display());

    Ok(ApplicationComponents { store })
}

/// Start the HTTP server and manage graceful shutdown.
pub async fn run(config: &ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = config.bind_addr();
    info!("Starting HTTP server on {}", bind_addr);

    let store = components.store.clone();
    let cors_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors_from_config(&cors_config))
            .app_data(web::Data::new(store.clone()))
            .configure(routes::configure_routes)
    })
    .workers(effective_workers(config.server.workers))
    .bind(&bind_addr)?
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            if let Err(e) = result {
                log::error!("Server task failed: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
            // Stop accepting new connections, let in-flight requests finish
            server_handle.stop(true).await;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

fn effective_workers(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get()
    } else {
        configured
    }
}

/// A running HTTP server instance intended for integration tests.
///
/// This starts the same Actix app wiring as the production server
/// (middleware stack, route registration, store injection) but binds to an
/// ephemeral port and provides an explicit shutdown handle.
pub struct RunningTestHttpServer {
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub store: Arc<ProjectStore>,
    server_handle: actix_web::dev::ServerHandle,
    server_task: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl RunningTestHttpServer {
    pub async fn shutdown(self) {
        self.server_handle.stop(false).await;
        let _ = self.server_task.await;
    }
}

/// Start the HTTP server for integration tests on a random available port.
///
/// Notes:
/// - Does not install Ctrl+C handling.
/// - Caller must invoke `shutdown()` to stop the server.
pub async fn run_for_tests(config: &ServerConfig) -> Result<RunningTestHttpServer> {
    let components = bootstrap(config)?;
    let store = components.store;

    let bind_ip = if config.server.host.is_empty() {
        "127.0.0.1"
    } else {
        config.server.host.as_str()
    };
    let listener = TcpListener::bind((bind_ip, 0))?;
    let bind_addr = listener.local_addr()?;

    let store_for_app = store.clone();
    let cors_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors_from_config(&cors_config))
            .app_data(web::Data::new(store_for_app.clone()))
            .configure(routes::configure_routes)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);
    let base_url = format!("http://{}", bind_addr);

    Ok(RunningTestHttpServer {
        base_url,
        bind_addr,
        store,
        server_handle,
        server_task,
    })
}
