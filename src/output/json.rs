//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of conflict reports
//! - Scan summary counts alongside the conflicts

use crate::domain::{ConflictReport, PackageConflict};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level; quiet suppresses output entirely
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Summary statistics
    summary: JsonSummary,
    /// Prefix filter applied (empty when unfiltered)
    prefixes: &'a [String],
    /// Conflicting packages
    conflicts: Vec<JsonConflict<'a>>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Manifests scanned
    manifests: usize,
    /// Package references across all manifests
    references: usize,
    /// Packages reported with conflicting versions
    conflicts: usize,
}

/// JSON representation of a conflicting package
#[derive(Serialize)]
struct JsonConflict<'a> {
    /// Package identifier
    id: &'a str,
    /// Number of distinct versions
    version_count: usize,
    /// Versions with their referencing manifests
    versions: Vec<JsonVersion<'a>>,
}

/// JSON representation of one version of a package
#[derive(Serialize)]
struct JsonVersion<'a> {
    /// Version string
    version: &'a str,
    /// Manifest paths
    manifests: Vec<String>,
}

impl<'a> From<&'a PackageConflict> for JsonConflict<'a> {
    fn from(conflict: &'a PackageConflict) -> Self {
        Self {
            id: &conflict.id,
            version_count: conflict.version_count(),
            versions: conflict
                .versions
                .iter()
                .map(|usage| JsonVersion {
                    version: &usage.version,
                    manifests: usage
                        .manifests
                        .iter()
                        .map(|path| path.display().to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ConflictReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let output = JsonOutput {
            summary: JsonSummary {
                manifests: report.stats.manifests,
                references: report.stats.references,
                conflicts: report.conflict_count(),
            },
            prefixes: &report.prefixes,
            conflicts: report.conflicts.iter().map(JsonConflict::from).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_conflict(
        &self,
        conflict: &PackageConflict,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &JsonConflict::from(conflict))?;
        writeln!(writer)
    }
}
