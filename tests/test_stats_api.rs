//! Integration tests for the statistics and health endpoints.

use serde_json::{json, Value};

#[path = "test_support/mod.rs"]
mod test_support;

use test_support::http_server::{sample_project, start};

#[tokio::test]
async fn stats_split_totals_across_today_and_past() {
    let server = start().await;
    let client = reqwest::Client::new();

    // One record stamped now (store default), one in the past, one with a
    // timestamp that cannot be parsed.
    let resp = client
        .post(server.url("/api/projects"))
        .json(&sample_project("wk-today"))
        .send()
        .await
        .expect("submit today's record");
    assert_eq!(resp.status(), 201);

    let mut past = sample_project("wk-past");
    past["scrapedAt"] = json!("2020-01-01T00:00:00");
    let resp = client
        .post(server.url("/api/projects"))
        .json(&past)
        .send()
        .await
        .expect("submit past record");
    assert_eq!(resp.status(), 201);

    let mut garbled = sample_project("wk-garbled");
    garbled["scrapedAt"] = json!("not a timestamp");
    let resp = client
        .post(server.url("/api/projects"))
        .json(&garbled)
        .send()
        .await
        .expect("submit garbled record");
    assert_eq!(resp.status(), 201);

    let body: Value = client
        .get(server.url("/api/stats"))
        .send()
        .await
        .expect("fetch stats")
        .json()
        .await
        .expect("parse stats");

    // The unparseable timestamp counts toward the total but not today
    assert_eq!(body["total_projects"], 3);
    assert_eq!(body["today_projects"], 1);
    assert_eq!(body["excel_file_exists"], true);

    server.shutdown().await;
}

#[tokio::test]
async fn stats_on_empty_table() {
    let server = start().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(server.url("/api/stats"))
        .send()
        .await
        .expect("fetch stats")
        .json()
        .await
        .expect("parse stats");

    assert_eq!(body["total_projects"], 0);
    assert_eq!(body["today_projects"], 0);
    // bootstrap creates the header-only table
    assert_eq!(body["excel_file_exists"], true);

    server.shutdown().await;
}

#[tokio::test]
async fn health_probe_always_succeeds_and_reports_file_state() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/api/health"))
        .send()
        .await
        .expect("fetch health");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse health");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["excel_file_status"], "exists");
    assert!(!body["timestamp"].as_str().expect("timestamp").is_empty());

    // Still healthy after the backing file disappears
    std::fs::remove_file(server.server.store.path()).expect("remove table file");

    let resp = client
        .get(server.url("/api/health"))
        .send()
        .await
        .expect("fetch health again");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse health");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["excel_file_status"], "not_found");

    server.shutdown().await;
}
