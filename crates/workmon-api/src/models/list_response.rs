//! Project listing response model.

use serde::{Deserialize, Serialize};
use workmon_commons::models::ProjectRecord;

/// 200 body for the listing endpoint. `total` counts the returned slice,
/// after any limit has been applied.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectRecord>,
    pub total: usize,
}
