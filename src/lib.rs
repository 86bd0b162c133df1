//! nuget-drift - NuGet version drift detection library
//!
//! This library scans a directory tree for `packages.config` manifests,
//! groups every package reference by package and version, and reports
//! packages referenced at more than one version.

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod reconcile;
pub mod scanner;
