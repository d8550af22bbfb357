//! Data models shared between the store and the API layer.

pub mod project;

pub use project::{
    local_timestamp, NewProject, ProjectRecord, DEFAULT_SOURCE, DESCRIPTION_MAX_CHARS,
    PROJECT_COLUMNS,
};
