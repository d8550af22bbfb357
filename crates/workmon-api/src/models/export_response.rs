//! Export availability response model.

use serde::{Deserialize, Serialize};

/// 200 body reporting that the backing file is ready for download.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub message: String,
    pub file_path: String,
    pub download_url: String,
}

impl ExportResponse {
    pub fn ready(file_path: impl Into<String>) -> Self {
        Self {
            message: "Excel file ready for download".to_string(),
            file_path: file_path.into(),
            download_url: "/api/download/excel".to_string(),
        }
    }
}
