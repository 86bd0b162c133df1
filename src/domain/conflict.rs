//! Version conflict results

use super::ScanStats;
use std::path::PathBuf;

/// One version of a conflicting package and the manifests that use it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUsage {
    /// Referenced version
    pub version: String,
    /// Manifests referencing this version
    pub manifests: Vec<PathBuf>,
}

/// A package referenced at more than one distinct version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConflict {
    /// Package identifier
    pub id: String,
    /// Every referenced version, ordered by version string
    pub versions: Vec<VersionUsage>,
}

impl PackageConflict {
    /// Number of distinct versions referenced
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }
}

/// Outcome of checking a reconciled scan for conflicts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    /// Conflicts selected for reporting, ordered by package identifier
    pub conflicts: Vec<PackageConflict>,
    /// Prefix filter that was applied (empty means unfiltered)
    pub prefixes: Vec<String>,
    /// Scan counts, for summaries
    pub stats: ScanStats,
}

impl ConflictReport {
    /// Create a report from selected conflicts
    pub fn new(conflicts: Vec<PackageConflict>) -> Self {
        Self {
            conflicts,
            ..Self::default()
        }
    }

    /// Record the prefix filter that produced this report
    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Attach scan counts
    pub fn with_stats(mut self, stats: ScanStats) -> Self {
        self.stats = stats;
        self
    }

    /// Returns true if at least one conflict was selected
    pub fn has_problems(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Number of reported conflicts
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Returns true if a prefix filter was applied
    pub fn is_filtered(&self) -> bool {
        !self.prefixes.is_empty()
    }
}
