//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: a packages.config could not be read or decoded
//! - ConfigError: Issues with CLI configuration
//! - IoError: Directory traversal failures
//!
//! Every variant is fatal to a scan. Nothing is recovered locally; errors
//! travel up to `main`, which prints them and exits non-zero.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A discovered manifest could not be opened or read
    #[error("failed to read manifest file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest content is not a well-formed `<packages>` document
    #[error("failed to parse XML in {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A directory's contents could not be listed during the walk
    #[error("failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ManifestError {
    /// Creates a new Unreadable error
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Malformed error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Replaces the path carried by this error.
    ///
    /// Parsers only see file content, so they report a placeholder path;
    /// the caller that knows the real location fixes it up here.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ManifestError::Unreadable { source, .. } => ManifestError::Unreadable {
                path: path.into(),
                source,
            },
            ManifestError::Malformed { message, .. } => ManifestError::Malformed {
                path: path.into(),
                message,
            },
        }
    }

    /// Returns the path of the offending manifest
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Unreadable { path, .. } | ManifestError::Malformed { path, .. } => path,
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new Traversal error.
    ///
    /// walkdir reports the entry that failed; fall back to the walk root
    /// when it has none.
    pub fn traversal(root: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        IoError::Traversal { path, source }
    }
}
