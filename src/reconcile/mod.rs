//! Reconciliation of manifest references into a per-package view
//!
//! This module provides:
//! - Prefix filter configuration from CLI args
//! - `reconcile`: group every reference by package and version
//! - `find_conflicts`: select packages referenced at more than one version

mod filter;

pub use filter::PrefixFilter;

use crate::domain::{
    ConflictReport, DependencyState, PackageConflict, ReconciledMap, VersionUsage,
};

/// Collate manifest references into package → version → manifests
///
/// Manifests are visited in the state's iteration order and appended in
/// that order. A manifest listing the same package+version twice appears
/// twice.
pub fn reconcile(state: &DependencyState) -> ReconciledMap {
    let mut map = ReconciledMap::new();
    for (manifest, references) in state.all_manifests() {
        for reference in references {
            map.add(&reference.id, &reference.version, manifest);
        }
    }
    map
}

/// Select every package with more than one distinct version that passes the filter
pub fn find_conflicts(map: &ReconciledMap, filter: &PrefixFilter) -> ConflictReport {
    let conflicts = map
        .iter()
        .filter(|(id, versions)| versions.len() > 1 && filter.matches(id))
        .map(|(id, versions)| PackageConflict {
            id: id.to_string(),
            versions: versions
                .iter()
                .map(|(version, manifests)| VersionUsage {
                    version: version.clone(),
                    manifests: manifests.clone(),
                })
                .collect(),
        })
        .collect();

    ConflictReport::new(conflicts).with_prefixes(filter.prefixes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PackageReference;
    use std::path::{Path, PathBuf};

    fn state_from(manifests: &[(&str, &[(&str, &str)])]) -> DependencyState {
        let mut state = DependencyState::new();
        for (path, refs) in manifests {
            let references = refs
                .iter()
                .map(|(id, version)| PackageReference::new(*id, *version))
                .collect();
            state.record_manifest(*path, references);
        }
        state
    }

    fn conflict_ids(report: &ConflictReport) -> Vec<&str> {
        report.conflicts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_reconcile_groups_by_package_and_version() {
        let state = state_from(&[
            ("projA/packages.config", &[("Foo", "1.0")]),
            ("projB/packages.config", &[("Foo", "2.0"), ("Bar", "1.0")]),
        ]);

        let map = reconcile(&state);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.manifests("Foo", "1.0"),
            Some(&[PathBuf::from("projA/packages.config")][..])
        );
        assert_eq!(
            map.manifests("Foo", "2.0"),
            Some(&[PathBuf::from("projB/packages.config")][..])
        );
        assert_eq!(
            map.manifests("Bar", "1.0"),
            Some(&[PathBuf::from("projB/packages.config")][..])
        );
    }

    #[test]
    fn test_reconcile_covers_every_referencing_manifest() {
        let state = state_from(&[
            ("a/packages.config", &[("Foo", "1.0")]),
            ("b/packages.config", &[("Foo", "1.0")]),
            ("c/packages.config", &[("Foo", "2.0")]),
            ("d/packages.config", &[("Bar", "1.0")]),
        ]);

        let map = reconcile(&state);
        let mut referencing: Vec<&Path> = map
            .versions("Foo")
            .unwrap()
            .values()
            .flatten()
            .map(PathBuf::as_path)
            .collect();
        referencing.sort();
        assert_eq!(
            referencing,
            vec![
                Path::new("a/packages.config"),
                Path::new("b/packages.config"),
                Path::new("c/packages.config"),
            ]
        );
    }

    #[test]
    fn test_reconcile_preserves_duplicates() {
        let state = state_from(&[("a/packages.config", &[("Foo", "1.0"), ("Foo", "1.0")])]);

        let map = reconcile(&state);
        assert_eq!(map.manifests("Foo", "1.0").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_reconcile_empty_state() {
        let map = reconcile(&DependencyState::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let state = state_from(&[
            ("a/packages.config", &[("Foo", "1.0"), ("Bar", "3.0")]),
            ("b/packages.config", &[("Foo", "1.1")]),
        ]);
        assert_eq!(reconcile(&state), reconcile(&state));
    }

    #[test]
    fn test_no_conflicts_when_versions_agree() {
        let state = state_from(&[
            ("a/packages.config", &[("Foo", "1.0"), ("Bar", "2.0")]),
            ("b/packages.config", &[("Foo", "1.0"), ("Bar", "2.0")]),
        ]);

        let report = find_conflicts(&reconcile(&state), &PrefixFilter::new());
        assert!(report.conflicts.is_empty());
        assert!(!report.has_problems());
    }

    #[test]
    fn test_single_version_never_reported() {
        let manifests: Vec<String> = (0..20).map(|i| format!("p{i}/packages.config")).collect();
        let mut state = DependencyState::new();
        for path in &manifests {
            state.record_manifest(path.as_str(), vec![PackageReference::new("Shared", "4.5.1")]);
        }

        let report = find_conflicts(&reconcile(&state), &PrefixFilter::new());
        assert!(!report.has_problems());
    }

    #[test]
    fn test_end_to_end_example() {
        let state = state_from(&[
            ("projA/packages.config", &[("Foo", "1.0")]),
            ("projB/packages.config", &[("Foo", "2.0"), ("Bar", "1.0")]),
        ]);

        let report = find_conflicts(&reconcile(&state), &PrefixFilter::new());
        assert!(report.has_problems());
        assert_eq!(conflict_ids(&report), vec!["Foo"]);

        let foo = &report.conflicts[0];
        assert_eq!(foo.version_count(), 2);
        assert_eq!(foo.versions[0].version, "1.0");
        assert_eq!(foo.versions[0].manifests, vec![PathBuf::from("projA/packages.config")]);
        assert_eq!(foo.versions[1].version, "2.0");
        assert_eq!(foo.versions[1].manifests, vec![PathBuf::from("projB/packages.config")]);
    }

    #[test]
    fn test_prefix_filtering() {
        let state = state_from(&[
            (
                "a/packages.config",
                &[("Serilog", "1.0"), ("Microsoft.Extensions.Logging", "3.0")],
            ),
            (
                "b/packages.config",
                &[("Serilog", "2.0"), ("Microsoft.Extensions.Logging", "3.1")],
            ),
        ]);
        let map = reconcile(&state);

        let unfiltered = find_conflicts(&map, &PrefixFilter::new());
        assert_eq!(
            conflict_ids(&unfiltered),
            vec!["Microsoft.Extensions.Logging", "Serilog"]
        );
        assert!(!unfiltered.is_filtered());

        let filter = PrefixFilter::new().with_prefixes(["Newtonsoft", "Microsoft"]);
        let filtered = find_conflicts(&map, &filter);
        assert_eq!(conflict_ids(&filtered), vec!["Microsoft.Extensions.Logging"]);
        assert!(filtered.has_problems());
        assert!(filtered.is_filtered());
    }

    #[test]
    fn test_filter_excluding_every_conflict_has_no_problems() {
        let state = state_from(&[
            ("a/packages.config", &[("Serilog", "1.0")]),
            ("b/packages.config", &[("Serilog", "2.0")]),
        ]);

        let filter = PrefixFilter::new().with_prefixes(["Newtonsoft"]);
        let report = find_conflicts(&reconcile(&state), &filter);
        assert!(!report.has_problems());
    }
}
