//! Request/response models for the REST API.

mod error_response;
mod export_response;
mod health_response;
mod list_response;
mod save_response;
mod stats_response;

pub use error_response::ErrorResponse;
pub use export_response::ExportResponse;
pub use health_response::HealthResponse;
pub use list_response::ProjectListResponse;
pub use save_response::{DuplicateResponse, ProjectSavedResponse};
pub use stats_response::StatsResponse;
