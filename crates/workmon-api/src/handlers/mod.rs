//! HTTP request handlers
//!
//! This module provides the HTTP handlers for the workmon REST API.

pub mod export;
pub mod health;
pub mod projects;
pub mod stats;

pub use export::{download_excel, export_excel};
pub use health::health_check;
pub use projects::{get_project, list_projects, submit_project};
pub use stats::get_stats;
