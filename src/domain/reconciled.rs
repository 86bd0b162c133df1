//! Package → version → manifests view of a scan

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifests referencing each version, keyed by version string
pub type VersionMap = BTreeMap<String, Vec<PathBuf>>;

/// Package identifier → version → manifests that referenced it
///
/// Path lists keep the order manifests were visited in and keep
/// duplicates when one manifest lists the same package+version twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledMap {
    packages: BTreeMap<String, VersionMap>,
}

impl ReconciledMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a manifest under `id` at `version`, creating entries as needed
    pub fn add(&mut self, id: &str, version: &str, manifest: &Path) {
        self.packages
            .entry(id.to_string())
            .or_default()
            .entry(version.to_string())
            .or_default()
            .push(manifest.to_path_buf());
    }

    /// Returns the versions referenced for a package
    pub fn versions(&self, id: &str) -> Option<&VersionMap> {
        self.packages.get(id)
    }

    /// Returns the manifests referencing a package at a version
    pub fn manifests(&self, id: &str, version: &str) -> Option<&[PathBuf]> {
        self.packages
            .get(id)
            .and_then(|versions| versions.get(version))
            .map(Vec::as_slice)
    }

    /// Iterates over packages and their version maps
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionMap)> {
        self.packages.iter().map(|(id, versions)| (id.as_str(), versions))
    }

    /// Number of distinct package identifiers
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package was referenced
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
