//! Submission response models.

use serde::{Deserialize, Serialize};

/// 201 body for a newly persisted submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectSavedResponse {
    pub message: String,
    pub project_id: String,
}

impl ProjectSavedResponse {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            message: "Project saved successfully".to_string(),
            project_id: project_id.into(),
        }
    }
}

/// 200 body for a duplicate submission. A duplicate is a successful no-op,
/// not an error: the existing row wins and nothing is written.
#[derive(Debug, Serialize, Deserialize)]
pub struct DuplicateResponse {
    pub message: String,
}

impl DuplicateResponse {
    pub fn new() -> Self {
        Self {
            message: "Project already exists".to_string(),
        }
    }
}

impl Default for DuplicateResponse {
    fn default() -> Self {
        Self::new()
    }
}
