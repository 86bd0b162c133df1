//! Manifest file discovery and parsing
//!
//! This module provides functionality to:
//! - Discover packages.config files in a directory tree
//! - Decode a packages.config into package references

mod detector;
mod packages_config;

pub use detector::discover_manifests;
pub use packages_config::PackagesConfigParser;

use crate::domain::ManifestRecord;
use crate::error::ManifestError;
use std::path::Path;

/// File name of NuGet manifests
pub const PACKAGES_CONFIG: &str = "packages.config";

/// Read and decode the manifest at `path`
///
/// I/O failures are `Unreadable`; content that is not UTF-8 or not a
/// well-formed packages.config is `Malformed`.
pub fn read_manifest(path: &Path) -> Result<ManifestRecord, ManifestError> {
    let bytes = std::fs::read(path).map_err(|e| ManifestError::unreadable(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        ManifestError::malformed(path, format!("invalid UTF-8: {}", e.utf8_error()))
    })?;
    let references = PackagesConfigParser::parse(&content).map_err(|e| e.with_path(path))?;
    Ok(ManifestRecord::new(path, references))
}
