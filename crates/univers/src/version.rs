//! Scheme-bound version values

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::scheme::{SchemeRegistry, VersionScheme};
use crate::VersionParseError;

/// An immutable version, normalized and ordered by its scheme.
///
/// Versions of different schemes are unordered and never equal.
#[derive(Clone)]
pub struct Version {
    scheme: Arc<dyn VersionScheme>,
    text: String,
}

impl Version {
    /// Parse `text` under `scheme` using the global registry
    pub fn parse(scheme: &str, text: &str) -> Result<Self, VersionParseError> {
        Self::parse_in(SchemeRegistry::global(), scheme, text)
    }

    /// Parse `text` under `scheme` looked up in `registry`
    pub fn parse_in(registry: &SchemeRegistry, scheme: &str, text: &str) -> Result<Self, VersionParseError> {
        Self::with_scheme(registry.lookup(scheme)?, text)
    }

    /// Parse a scheme-prefixed version such as `semver:1.2.3`
    pub fn parse_prefixed(prefixed: &str) -> Result<Self, VersionParseError> {
        match prefixed.split_once(':') {
            Some((scheme, text)) => Self::parse(scheme, text),
            None => Err(VersionParseError::MissingScheme(prefixed.to_string())),
        }
    }

    /// Parse `text` with an already resolved scheme
    pub fn with_scheme(scheme: Arc<dyn VersionScheme>, text: &str) -> Result<Self, VersionParseError> {
        let text = scheme.parse(text)?;
        Ok(Version { scheme, text })
    }

    /// Name of the scheme this version belongs to
    pub fn scheme_name(&self) -> &str {
        self.scheme.name()
    }

    /// The scheme implementation
    pub fn scheme(&self) -> &Arc<dyn VersionScheme> {
        &self.scheme
    }

    /// Normalized version text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Order against `other`, `None` when the schemes differ
    pub fn compare(&self, other: &Version) -> Option<Ordering> {
        if self.scheme_name() != other.scheme_name() {
            return None;
        }
        Some(self.scheme.compare(&self.text, &other.text))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({}:{})", self.scheme_name(), self.text)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
