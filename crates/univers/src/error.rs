//! Error types for specifier parsing and version handling

use thiserror::Error;

/// Errors raised by a version scheme while reading version text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("Unknown version scheme \"{0}\"")]
    UnknownScheme(String),
    #[error("Version \"{0}\" is not prefixed by a scheme")]
    MissingScheme(String),
    #[error("Empty version string for scheme \"{scheme}\"")]
    Empty { scheme: String },
    #[error("Invalid {scheme} version \"{version}\": {reason}")]
    InvalidVersion {
        scheme: String,
        version: String,
        reason: String,
    },
    #[error("Scheme \"{0}\" does not expose version components")]
    Unstructured(String),
}

/// Errors raised while building or querying a specifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed version specifier \"{spec}\": {reason}")]
    MalformedSpecifier { spec: String, reason: String },
    #[error("Invalid version range \"{range}\": {reason}")]
    InvalidRange { range: String, reason: String },
    #[error("Invalid version range \"{range}\"")]
    InvalidRangeVersion {
        range: String,
        #[source]
        source: VersionParseError,
    },
    #[error("No pessimistic upper bound exists for version {version}")]
    NoPessimisticBound { version: String },
    #[error(transparent)]
    Version(#[from] VersionParseError),
}

impl Error {
    pub(crate) fn malformed(spec: &str, reason: &str) -> Self {
        Error::MalformedSpecifier {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_range(range: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }

    /// True for both flavours of invalid range.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. } | Error::InvalidRangeVersion { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
