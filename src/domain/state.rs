//! Accumulated manifests discovered during a scan

use super::PackageReference;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A decoded manifest: where it lives and what it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Path to the packages.config file
    pub path: PathBuf,
    /// References in document order
    pub references: Vec<PackageReference>,
}

impl ManifestRecord {
    /// Create a new ManifestRecord
    pub fn new(path: impl Into<PathBuf>, references: Vec<PackageReference>) -> Self {
        Self {
            path: path.into(),
            references,
        }
    }
}

/// Counts describing a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of manifests recorded
    pub manifests: usize,
    /// Number of package references across all manifests
    pub references: usize,
}

/// Manifest path to package references, filled in as manifests are decoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyState {
    manifests: BTreeMap<PathBuf, Vec<PackageReference>>,
}

impl DependencyState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the references of a manifest, replacing any earlier entry for the same path
    pub fn record_manifest(&mut self, path: impl Into<PathBuf>, references: Vec<PackageReference>) {
        self.manifests.insert(path.into(), references);
    }

    /// Record a decoded manifest
    pub fn record(&mut self, record: ManifestRecord) {
        self.record_manifest(record.path, record.references);
    }

    /// Returns all recorded (path, references) pairs
    pub fn all_manifests(&self) -> impl Iterator<Item = (&Path, &[PackageReference])> {
        self.manifests
            .iter()
            .map(|(path, references)| (path.as_path(), references.as_slice()))
    }

    /// Returns the references recorded for a manifest
    pub fn get(&self, path: &Path) -> Option<&[PackageReference]> {
        self.manifests.get(path).map(Vec::as_slice)
    }

    /// Number of recorded manifests
    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    /// Returns true if no manifest has been recorded
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Total number of package references across all manifests
    pub fn total_references(&self) -> usize {
        self.manifests.values().map(Vec::len).sum()
    }

    /// Summary counts for reporting
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            manifests: self.len(),
            references: self.total_references(),
        }
    }
}
