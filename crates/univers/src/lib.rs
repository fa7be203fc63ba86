//! Scheme-qualified version specifiers
//!
//! This crate parses specifiers such as `semver:>=2.0.0,<3.0.0` into a list of
//! primitive ranges, expands the pessimistic `~>` operator, and answers whether
//! a concrete version is allowed by a specifier. Version ordering is delegated
//! to pluggable [`VersionScheme`] implementations looked up in a
//! [`SchemeRegistry`].

mod error;
mod operator;
mod pessimistic;
mod range;
pub mod scheme;
mod specifier;
mod util;
mod version;

pub use error::{Error, Result, VersionParseError};
pub use operator::Operator;
pub use pessimistic::{normalized_pessimistic_ranges, pessimistic_upper_bound, PESSIMISTIC_OPERATOR};
pub use range::VersionRange;
pub use scheme::{Component, SchemeRegistry, StructuredScheme, VersionScheme};
pub use specifier::VersionSpecifier;
pub use util::remove_whitespace;
pub use version::Version;

/// Parse a scheme-prefixed specifier string with the default registry.
pub fn parse(spec: &str) -> Result<VersionSpecifier> {
    VersionSpecifier::parse(spec)
}

/// Check whether `version` is allowed by the specifier `spec`.
///
/// ```
/// assert!(univers::contains("semver:>=1.0.0,<2.0.0", "1.5.0").unwrap());
/// assert!(!univers::contains("semver:~>1.2.0", "1.3.0").unwrap());
/// ```
pub fn contains(spec: &str, version: &str) -> Result<bool> {
    VersionSpecifier::parse(spec)?.contains_str(version)
}
