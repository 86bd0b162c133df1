//! Package reference parsed from a packages.config entry

/// One `<package>` entry of a packages.config manifest
///
/// The version is an opaque token: two references agree only when their
/// version strings are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageReference {
    /// Package identifier (`id` attribute)
    pub id: String,
    /// Referenced version (`version` attribute)
    pub version: String,
    /// Target framework moniker (`targetFramework` attribute), informational only
    pub target_framework: String,
}

impl PackageReference {
    /// Creates a new reference without a target framework
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            target_framework: String::new(),
        }
    }

    /// Sets the target framework (builder pattern)
    pub fn with_target_framework(mut self, target_framework: impl Into<String>) -> Self {
        self.target_framework = target_framework.into();
        self
    }
}
