//! Shared HTTP test-server helper.
//!
//! Starts the real server wiring (middleware stack, route registration,
//! store injection) on an ephemeral port with an isolated temp data
//! directory, so individual test files don't duplicate bootstrap code.

use serde_json::{json, Value};
use tempfile::TempDir;

use workmon::lifecycle::{self, RunningTestHttpServer};
use workmon_commons::config::ServerConfig;

pub struct HttpTestServer {
    pub base_url: String,
    pub server: RunningTestHttpServer,
    // Held so the data directory outlives the server
    _data_dir: TempDir,
}

impl HttpTestServer {
    /// URL of an endpoint path like `/api/projects`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn shutdown(self) {
        self.server.shutdown().await;
    }
}

/// Start a test server over a fresh, isolated data directory.
pub async fn start() -> HttpTestServer {
    let data_dir = tempfile::tempdir().expect("create temp data dir");

    let mut config = ServerConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.workers = 1;
    config.storage.data_dir = data_dir.path().display().to_string();

    let server = lifecycle::run_for_tests(&config)
        .await
        .expect("start test server");

    HttpTestServer {
        base_url: server.base_url.clone(),
        server,
        _data_dir: data_dir,
    }
}

/// A complete, valid submission payload for the given id.
pub fn sample_project(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Listing {}", id),
        "description": "A scraped job listing",
        "link": format!("https://www.workana.com/job/{}", id),
        "budget": "USD 250 - 500",
        "tags": ["rust", "backend"],
        "postedTime": "2 hours ago",
        "source": "workana"
    })
}
