//! Integration tests for project submission and retrieval.
//!
//! Each test runs the real HTTP server wiring on an ephemeral port with an
//! isolated temp data directory (see `tests/test_support`).

use serde_json::{json, Value};

#[path = "test_support/mod.rs"]
mod test_support;

use test_support::http_server::{sample_project, start};

#[tokio::test]
async fn submit_then_fetch_roundtrip() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/projects"))
        .json(&sample_project("wk-1"))
        .send()
        .await
        .expect("send submission");
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["message"], "Project saved successfully");
    assert_eq!(body["project_id"], "wk-1");

    let resp = client
        .get(server.url("/api/projects/wk-1"))
        .send()
        .await
        .expect("fetch project");
    assert_eq!(resp.status(), 200);
    let record: Value = resp.json().await.expect("parse record");
    assert_eq!(record["ID"], "wk-1");
    assert_eq!(record["Title"], "Listing wk-1");
    assert_eq!(record["Tags"], "rust, backend");
    assert_eq!(record["Source"], "workana");

    server.shutdown().await;
}

#[tokio::test]
async fn duplicate_submission_is_a_successful_noop() {
    let server = start().await;
    let client = reqwest::Client::new();

    let first = sample_project("wk-dup");
    let mut second = sample_project("wk-dup");
    second["title"] = json!("Replacement title");

    let resp = client
        .post(server.url("/api/projects"))
        .json(&first)
        .send()
        .await
        .expect("first submission");
    assert_eq!(resp.status(), 201);

    let resp = client
        .post(server.url("/api/projects"))
        .json(&second)
        .send()
        .await
        .expect("second submission");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["message"], "Project already exists");

    // Exactly one stored row, and the first write won
    let resp = client
        .get(server.url("/api/projects"))
        .send()
        .await
        .expect("list projects");
    let body: Value = resp.json().await.expect("parse list");
    assert_eq!(body["total"], 1);
    assert_eq!(body["projects"][0]["Title"], "Listing wk-dup");

    server.shutdown().await;
}

#[tokio::test]
async fn missing_required_fields_are_reported_together() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/projects"))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .expect("send submission");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse body");
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("id"), "error should name id: {}", error);
    assert!(error.contains("link"), "error should name link: {}", error);

    // Nothing was written
    let resp = client
        .get(server.url("/api/projects"))
        .send()
        .await
        .expect("list projects");
    let body: Value = resp.json().await.expect("parse list");
    assert_eq!(body["total"], 0);

    server.shutdown().await;
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/projects"))
        .header("Content-Type", "application/json")
        .body("")
        .send()
        .await
        .expect("send empty body");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["error"], "No data provided");

    server.shutdown().await;
}

#[tokio::test]
async fn description_is_truncated_and_defaults_filled() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/projects"))
        .json(&json!({
            "id": "wk-trunc",
            "title": "Truncation",
            "link": "https://www.workana.com/job/wk-trunc",
            "description": "x".repeat(700)
        }))
        .send()
        .await
        .expect("send submission");
    assert_eq!(resp.status(), 201);

    let record: Value = client
        .get(server.url("/api/projects/wk-trunc"))
        .send()
        .await
        .expect("fetch project")
        .json()
        .await
        .expect("parse record");

    let description = record["Description"].as_str().expect("description");
    assert_eq!(description.chars().count(), 500);
    // scrapedAt and source were absent from the payload
    assert_eq!(record["Source"], "workana");
    assert!(!record["Scraped_At"].as_str().expect("scraped_at").is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn limit_returns_front_of_sequence() {
    let server = start().await;
    let client = reqwest::Client::new();

    for idx in 0..10 {
        let resp = client
            .post(server.url("/api/projects"))
            .json(&sample_project(&format!("wk-{:02}", idx)))
            .send()
            .await
            .expect("send submission");
        assert_eq!(resp.status(), 201);
    }

    let body: Value = client
        .get(server.url("/api/projects?limit=3"))
        .send()
        .await
        .expect("list with limit")
        .json()
        .await
        .expect("parse list");

    assert_eq!(body["total"], 3);
    let projects = body["projects"].as_array().expect("projects array");
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["ID"], "wk-00");
    assert_eq!(projects[1]["ID"], "wk-01");
    assert_eq!(projects[2]["ID"], "wk-02");

    server.shutdown().await;
}

#[tokio::test]
async fn unknown_project_is_a_404() {
    let server = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/api/projects/no-such-id"))
        .send()
        .await
        .expect("fetch project");
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["error"], "Project not found");

    server.shutdown().await;
}
