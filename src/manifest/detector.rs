//! Manifest file discovery
//!
//! Walks a directory tree and yields every regular file named exactly
//! `packages.config`. Symbolic links are not followed. Entries are visited
//! in file-name order so repeated scans see manifests in the same order.

use crate::error::IoError;
use crate::manifest::PACKAGES_CONFIG;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lazily discover packages.config files below `root`
///
/// The iterator yields an error for any directory that cannot be listed;
/// callers decide whether to stop there.
pub fn discover_manifests(root: &Path) -> impl Iterator<Item = Result<PathBuf, IoError>> {
    let walk_root = root.to_path_buf();
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if is_manifest(&entry) => Some(Ok(clean_path(entry.path()))),
            Ok(_) => None,
            Err(e) => Some(Err(IoError::traversal(&walk_root, e))),
        })
}

fn is_manifest(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name() == PACKAGES_CONFIG
}

/// Drop leading `.` components so `./app/packages.config` reads `app/packages.config`
fn clean_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .skip_while(|component| matches!(component, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        cleaned
    }
}
