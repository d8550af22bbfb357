//! Statistics response model.

use serde::{Deserialize, Serialize};

/// 200 body for the statistics endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_projects: usize,
    pub today_projects: usize,
    pub excel_file_exists: bool,
}
