//! Prefix filter configuration
//!
//! This module provides the PrefixFilter struct that restricts which
//! conflicting packages are reported.

/// Allow-list of package identifier prefixes
///
/// An empty filter matches every package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixFilter {
    prefixes: Vec<String>,
}

impl PrefixFilter {
    /// Create a filter that matches every package
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefixes to match. Blank entries are dropped and
    /// surrounding whitespace is trimmed.
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        self
    }

    /// Returns true if no prefix is configured
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Configured prefixes
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Check if a package identifier should be reported
    pub fn matches(&self, id: &str) -> bool {
        if self.prefixes.is_empty() {
            return true; // No filter means report all
        }
        self.prefixes.iter().any(|p| id.starts_with(p.as_str()))
    }
}
