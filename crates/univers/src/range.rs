//! A single operator + version constraint

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::scheme::SchemeRegistry;
use crate::{Error, Operator, Result, Version};

lazy_static! {
    // Leading operator characters, then the version text
    static ref RANGE_RE: Regex = Regex::new(r"^([<>=!~^]*)(.*)$").unwrap();
}

/// One primitive constraint such as `>=1.2.0`, scoped to the scheme of its version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRange {
    operator: Operator,
    version: Version,
}

impl VersionRange {
    /// Create a range from parts
    pub fn new(operator: Operator, version: Version) -> Self {
        VersionRange { operator, version }
    }

    /// Parse a range expression like `>=1.2.0` under `scheme` using the global registry
    pub fn parse(scheme: &str, expression: &str) -> Result<Self> {
        Self::parse_in(SchemeRegistry::global(), scheme, expression)
    }

    /// Parse a range expression under `scheme` looked up in `registry`
    pub fn parse_in(registry: &SchemeRegistry, scheme: &str, expression: &str) -> Result<Self> {
        let caps = RANGE_RE
            .captures(expression)
            .ok_or_else(|| Error::invalid_range(expression, "unparseable range"))?;
        let op = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str());

        let operator = Operator::parse(op).ok_or_else(|| {
            Error::invalid_range(
                expression,
                format!(
                    "unknown operator \"{}\", expected one of: {}",
                    op,
                    Operator::supported_operators().join(", ")
                ),
            )
        })?;
        if text.is_empty() {
            return Err(Error::invalid_range(expression, "missing version"));
        }

        let scheme = registry.lookup(scheme)?;
        let version = Version::with_scheme(scheme, text).map_err(|source| Error::InvalidRangeVersion {
            range: expression.to_string(),
            source,
        })?;

        Ok(VersionRange { operator, version })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The bound version
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn scheme_name(&self) -> &str {
        self.version.scheme_name()
    }

    /// Check whether `version` satisfies this range. Versions of another scheme never do.
    pub fn contains(&self, version: &Version) -> bool {
        match version.compare(&self.version) {
            Some(ordering) => self.operator.accepts(ordering),
            None => {
                log::debug!(
                    "Version {:?} is not comparable with range {} ({})",
                    version,
                    self,
                    self.scheme_name()
                );
                false
            }
        }
    }

    /// Parse `version` under this range's scheme and check it
    pub fn contains_str(&self, version: &str) -> Result<bool> {
        let version = Version::with_scheme(self.version.scheme().clone(), version)?;
        Ok(self.contains(&version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionParseError;

    fn range(expression: &str) -> VersionRange {
        VersionRange::parse("semver", expression).unwrap()
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(range(">=1.2.0").operator(), Operator::GreaterThanOrEqual);
        assert_eq!(range(">1.2.0").operator(), Operator::GreaterThan);
        assert_eq!(range("<=1.2.0").operator(), Operator::LessThanOrEqual);
        assert_eq!(range("<1.2.0").operator(), Operator::LessThan);
        assert_eq!(range("!=1.2.0").operator(), Operator::NotEqual);
        assert_eq!(range("==1.2.0").operator(), Operator::Exact);
        assert_eq!(range("1.2.0").operator(), Operator::Exact);
        assert_eq!(range(">=1.2.0").version().as_str(), "1.2.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(range(">=1.2.0").to_string(), ">=1.2.0");
        assert_eq!(range("==1.2.0").to_string(), "1.2.0");
        assert_eq!(range("1.2.0").to_string(), "1.2.0");
        assert_eq!(range("!=1.2.0-rc.1").to_string(), "!=1.2.0-rc.1");
    }

    #[test]
    fn test_unknown_operator() {
        for expression in ["=>1.0.0", "=1.0.0", "~1.0.0", "^1.0.0", "~>1.0.0", "<>1.0.0"] {
            let err = VersionRange::parse("semver", expression).unwrap_err();
            assert!(matches!(err, Error::InvalidRange { .. }), "{expression}: {err}");
        }
    }

    #[test]
    fn test_missing_version() {
        assert!(matches!(VersionRange::parse("semver", ">="), Err(Error::InvalidRange { .. })));
        assert!(matches!(VersionRange::parse("semver", ""), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_unparseable_version() {
        let err = VersionRange::parse("semver", ">=1.2").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRangeVersion {
                source: VersionParseError::InvalidVersion { .. },
                ..
            }
        ));
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(
            VersionRange::parse("pypi", ">=1.0").unwrap_err(),
            Error::Version(VersionParseError::UnknownScheme("pypi".to_string()))
        );
    }

    #[test]
    fn test_contains() {
        let r = range(">=1.2.0");
        assert!(r.contains_str("1.2.0").unwrap());
        assert!(r.contains_str("2.0.0").unwrap());
        assert!(!r.contains_str("1.1.9").unwrap());
        assert!(!r.contains_str("1.2.0-rc.1").unwrap());

        let r = range("1.2.0");
        assert!(r.contains_str("1.2.0").unwrap());
        assert!(r.contains_str("1.2.0+build.7").unwrap());
        assert!(!r.contains_str("1.2.1").unwrap());

        let r = range("!=1.2.0");
        assert!(!r.contains_str("1.2.0").unwrap());
        assert!(r.contains_str("1.2.1").unwrap());
    }

    #[test]
    fn test_contains_invalid_query() {
        assert!(matches!(
            range("<2.0.0").contains_str("2"),
            Err(Error::Version(VersionParseError::InvalidVersion { .. }))
        ));
    }

    #[test]
    fn test_contains_other_scheme() {
        let r = range(">=1.0.0");
        let composer = Version::parse("composer", "1.5.0").unwrap();
        assert!(!r.contains(&composer));
    }

    #[test]
    fn test_composer_range() {
        let r = VersionRange::parse("composer", "<2.0").unwrap();
        assert!(r.contains_str("1.9999.9999").unwrap());
        assert!(r.contains_str("2.0-beta1").unwrap());
        assert!(!r.contains_str("v2.0.0").unwrap());
    }
}
