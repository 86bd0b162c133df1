//! Core domain models for nuget-drift
//!
//! This module contains the fundamental types used throughout the application:
//! - Package references decoded from packages.config
//! - The per-manifest dependency state built during a scan
//! - The reconciled package/version/manifest view
//! - Conflict report structures

mod conflict;
mod package_reference;
mod reconciled;
mod state;

pub use conflict::{ConflictReport, PackageConflict, VersionUsage};
pub use package_reference::PackageReference;
pub use reconciled::{ReconciledMap, VersionMap};
pub use state::{DependencyState, ManifestRecord, ScanStats};
