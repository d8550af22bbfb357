//! Error response model.

use serde::{Deserialize, Serialize};

/// JSON error body shared by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    /// Generic 500 body. The precise cause stays in the server log and is
    /// never leaked to the client.
    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
