//! The project table store.

use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use workmon_commons::errors::Result;
use workmon_commons::models::{NewProject, ProjectRecord};

use crate::workbook;

/// Append-only, deduplicated store over a single spreadsheet file.
///
/// The backing path is injected at construction so deployments (and tests)
/// can point the store at isolated files. Every append is a full read plus
/// a full rewrite; `write_lock` serializes the read-check-write cycle so
/// concurrent requests within one process can neither lose rows nor bypass
/// the uniqueness check. Multiple processes writing the same file remain
/// unsupported, and a crash mid-rewrite can leave a partial file.
pub struct ProjectStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file currently exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file with the column header and zero data rows
    /// when it does not exist. Idempotent; safe to call on every startup
    /// and before every write.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        workbook::write_table(&self.path, &[])?;
        info!("Created project table at {}", self.path.display());
        Ok(())
    }

    /// Load every stored record in table order.
    ///
    /// A missing or unreadable file is treated as "no data": the failure
    /// is logged and an empty vector returned, so callers never have to
    /// distinguish "empty" from "unavailable".
    pub fn load_all(&self) -> Vec<ProjectRecord> {
        if !self.path.exists() {
            return Vec::new();
        }
        match workbook::read_table(&self.path) {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "Failed to read project table {}: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Append a submission unless a row with the same id already exists.
    ///
    /// Returns `Ok(false)` for a duplicate — no write performed, not an
    /// error — and `Ok(true)` once the normalized record has been appended
    /// and the table rewritten. Read or write failures surface as errors
    /// for the caller to map.
    pub fn append(&self, submission: NewProject) -> Result<bool> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        self.ensure_initialized()?;
        let mut records = workbook::read_table(&self.path)?;

        let record = submission.into_record();
        if records.iter().any(|existing| existing.id == record.id) {
            debug!("Project {} already stored, skipping", record.id);
            return Ok(false);
        }

        records.push(record);
        workbook::write_table(&self.path, &records)?;
        debug!("Project table now holds {} row(s)", records.len());
        Ok(true)
    }
}
