//! Health probe response model.

use serde::{Deserialize, Serialize};
use workmon_commons::models::local_timestamp;

/// 200 body for the liveness probe. Always "healthy" while the process is
/// alive; `excel_file_status` reflects whether the backing file exists.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub excel_file_status: String,
}

impl HealthResponse {
    pub fn current(file_exists: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: local_timestamp(),
            excel_file_status: if file_exists { "exists" } else { "not_found" }.to_string(),
        }
    }
}
