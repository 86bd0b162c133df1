//! Scan workflow: discover → read → decode → record
//!
//! This module provides:
//! - Validation of the scan root
//! - Sequential decoding of every discovered packages.config
//! - Fail-fast error handling: the first unreadable directory or manifest
//!   aborts the scan and no partial state is returned

use crate::domain::DependencyState;
use crate::error::{AppError, ConfigError, IoError};
use crate::manifest::{discover_manifests, read_manifest};
use crate::progress::Progress;
use std::path::PathBuf;
use tracing::{debug, info};

/// Scans a directory tree into a DependencyState
pub struct Scanner {
    /// Directory to scan
    root: PathBuf,
    /// Whether to show a progress spinner
    show_progress: bool,
}

impl Scanner {
    /// Create a scanner for the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_progress: false,
        }
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Walk the root directory and decode every packages.config found
    pub fn scan(&self) -> Result<DependencyState, AppError> {
        self.check_root()?;
        debug!("Scanning {} for manifests", self.root.display());
        self.collect(discover_manifests(&self.root))
    }

    fn collect<I>(&self, paths: I) -> Result<DependencyState, AppError>
    where
        I: Iterator<Item = Result<PathBuf, IoError>>,
    {
        let mut progress = Progress::scan(&self.root, self.show_progress);

        let mut state = DependencyState::new();
        for path in paths {
            let path = path?;
            progress.reading(&path);

            let record = read_manifest(&path)?;
            debug!(
                "Recorded {} ({} references)",
                record.path.display(),
                record.references.len()
            );
            state.record(record);
            progress.recorded();
        }
        progress.finish();

        info!(
            "Scanned {} manifests with {} package references",
            state.len(),
            state.total_references()
        );
        Ok(state)
    }

    fn check_root(&self) -> Result<(), AppError> {
        if !self.root.exists() {
            return Err(IoError::directory_not_found(&self.root).into());
        }
        if !self.root.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: self.root.clone(),
                message: "not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
