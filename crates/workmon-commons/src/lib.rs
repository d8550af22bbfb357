// workmon Commons Library
//
// Shared building blocks used by the store and API crates:
// record models, server configuration, and error types.

pub mod config;
pub mod errors;
pub mod models;

pub use config::ServerConfig;
pub use errors::{ConfigError, Result, StoreError};
pub use models::{NewProject, ProjectRecord, DEFAULT_SOURCE, PROJECT_COLUMNS};
