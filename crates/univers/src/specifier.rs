//! VersionSpecifier - a scheme-qualified AND of version ranges

use std::fmt;
use std::str::FromStr;

use crate::pessimistic::{normalized_pessimistic_ranges, PESSIMISTIC_OPERATOR};
use crate::scheme::SchemeRegistry;
use crate::util::remove_whitespace;
use crate::{Error, Result, Version, VersionRange};

/// A set of version ranges sharing one scheme. A version is contained when it
/// satisfies every range.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionSpecifier {
    scheme: String,
    ranges: Vec<VersionRange>,
}

impl VersionSpecifier {
    /// Parse a specifier prefixed by its scheme, such as `semver:1.2.3,>=2.0.0`
    pub fn parse(spec: &str) -> Result<Self> {
        Self::parse_in(SchemeRegistry::global(), spec)
    }

    /// Like [`VersionSpecifier::parse`], resolving schemes in `registry`
    pub fn parse_in(registry: &SchemeRegistry, spec: &str) -> Result<Self> {
        let (scheme, expressions) = spec
            .split_once(':')
            .ok_or_else(|| Error::malformed(spec, "not prefixed by a scheme"))?;

        if scheme.is_empty() {
            return Err(Error::malformed(spec, "not prefixed by a scheme"));
        }
        if expressions.is_empty() {
            return Err(Error::malformed(spec, "contains no version range"));
        }

        Self::parse_with_scheme_in(registry, scheme, expressions)
    }

    /// Parse comma separated range expressions under `scheme`
    pub fn parse_with_scheme(scheme: &str, expressions: &str) -> Result<Self> {
        Self::parse_with_scheme_in(SchemeRegistry::global(), scheme, expressions)
    }

    /// Like [`VersionSpecifier::parse_with_scheme`], resolving `scheme` in `registry`
    pub fn parse_with_scheme_in(registry: &SchemeRegistry, scheme: &str, expressions: &str) -> Result<Self> {
        let expressions = remove_whitespace(expressions);
        if expressions.is_empty() {
            return Err(Error::malformed(
                &format!("{}:{}", scheme, expressions),
                "contains no version range",
            ));
        }

        let resolved = registry.lookup(scheme)?;
        let expands_pessimistic = resolved.as_structured().is_some();

        let mut ranges = Vec::new();
        for expression in expressions.split(',') {
            if expands_pessimistic && expression.contains(PESSIMISTIC_OPERATOR) {
                let (lower, upper) = normalized_pessimistic_ranges(&resolved, expression)?;
                ranges.push(lower);
                ranges.push(upper);
                continue;
            }

            ranges.push(VersionRange::parse_in(registry, scheme, expression)?);
        }

        log::debug!("Parsed {} range(s) for scheme {}", ranges.len(), scheme);

        Ok(VersionSpecifier {
            scheme: scheme.to_string(),
            ranges,
        })
    }

    /// The scheme all ranges share
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Ranges in the order they were written, pessimistic expansions inline
    pub fn ranges(&self) -> &[VersionRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Check whether `version` satisfies every range
    pub fn contains(&self, version: &Version) -> bool {
        self.ranges.iter().all(|range| range.contains(version))
    }

    /// Parse `version` and check it, resolving a `scheme:` prefix in the global registry.
    ///
    /// A prefix naming another scheme yields `false`, like [`VersionSpecifier::contains`].
    pub fn contains_str(&self, version: &str) -> Result<bool> {
        self.contains_str_in(SchemeRegistry::global(), version)
    }

    /// Like [`VersionSpecifier::contains_str`], resolving a prefix in `registry`
    pub fn contains_str_in(&self, registry: &SchemeRegistry, version: &str) -> Result<bool> {
        let Some(first) = self.ranges.first() else {
            return Ok(true);
        };
        let own = first.version().scheme();

        let (scheme, text) = match version.split_once(':') {
            Some((prefix, text)) if prefix == self.scheme => (own.clone(), text),
            Some((prefix, text)) => match registry.get(prefix) {
                Some(scheme) => (scheme, text),
                // not a scheme prefix, the colon belongs to the version
                None => (own.clone(), version),
            },
            None => (own.clone(), version),
        };

        let version = Version::with_scheme(scheme, text)?;
        Ok(self.contains(&version))
    }

    /// Return the versions this specifier contains, skipping ones that do not parse
    pub fn satisfied_by<'a>(&self, versions: &[&'a str]) -> Vec<&'a str> {
        versions
            .iter()
            .copied()
            .filter(|v| match self.contains_str(v) {
                Ok(contained) => contained,
                Err(e) => {
                    log::debug!("Skipping {}: {}", v, e);
                    false
                }
            })
            .collect()
    }

    /// `<scheme>:<range>,<range>...` in stored order
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // TODO: sort ranges by bound version so equivalent specifiers render identically
        let ranges: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}:{}", self.scheme, ranges.join(","))
    }
}

impl FromStr for VersionSpecifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
