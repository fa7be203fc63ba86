//! Semantic Versioning 2.0.0

use std::cmp::Ordering;

use ::semver::{BuildMetadata, Prerelease, Version};
use lazy_static::lazy_static;
use regex::Regex;

use super::{Component, StructuredScheme, VersionScheme};
use crate::VersionParseError;

lazy_static! {
    static ref LAST_NUMBER_RE: Regex = Regex::new(r"(\d+)(\D*)$").unwrap();
}

const NAME: &str = "semver";

/// The `semver` scheme. Build metadata does not take part in ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverScheme;

impl SemverScheme {
    fn parse_version(&self, text: &str) -> Result<Version, VersionParseError> {
        if text.is_empty() {
            return Err(VersionParseError::Empty {
                scheme: NAME.to_string(),
            });
        }
        Version::parse(text).map_err(|e| invalid(text, e.to_string()))
    }
}

fn invalid(version: &str, reason: impl Into<String>) -> VersionParseError {
    VersionParseError::InvalidVersion {
        scheme: NAME.to_string(),
        version: version.to_string(),
        reason: reason.into(),
    }
}

/// Increment the last run of digits in `s`, or append `.1` when there is none.
fn increment_last_number(s: &str) -> Option<String> {
    match LAST_NUMBER_RE.captures(s) {
        Some(caps) => {
            let digits = caps.get(1)?;
            let next = digits.as_str().parse::<u64>().ok()?.checked_add(1)?;
            Some(format!("{}{}{}", &s[..digits.start()], next, &s[digits.end()..]))
        }
        None => Some(format!("{}.1", s)),
    }
}

/// Semver precedence: build metadata is ignored, a pre-release sorts below its release.
fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch)
        .cmp(&(b.major, b.minor, b.patch))
        .then_with(|| match (a.pre.is_empty(), b.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.pre.cmp(&b.pre),
        })
}

impl VersionScheme for SemverScheme {
    fn name(&self) -> &str {
        NAME
    }

    fn parse(&self, text: &str) -> Result<String, VersionParseError> {
        Ok(self.parse_version(text)?.to_string())
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (Version::parse(a), Version::parse(b)) {
            (Ok(a), Ok(b)) => precedence(&a, &b),
            _ => a.cmp(b),
        }
    }

    fn as_structured(&self) -> Option<&dyn StructuredScheme> {
        Some(self)
    }
}

impl StructuredScheme for SemverScheme {
    /// `(major, minor, patch, prerelease, build)`
    fn components(&self, version: &str) -> Result<Vec<Option<String>>, VersionParseError> {
        let v = self.parse_version(version)?;
        let optional = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };

        Ok(vec![
            Some(v.major.to_string()),
            Some(v.minor.to_string()),
            Some(v.patch.to_string()),
            optional(v.pre.as_str()),
            optional(v.build.as_str()),
        ])
    }

    fn bump(&self, version: &str, component: Component) -> Result<String, VersionParseError> {
        let v = self.parse_version(version)?;
        let overflow = || invalid(version, format!("cannot bump {:?}", component));

        let bumped = match component {
            Component::Minor => Version::new(v.major, v.minor.checked_add(1).ok_or_else(overflow)?, 0),
            Component::Patch => Version::new(v.major, v.minor, v.patch.checked_add(1).ok_or_else(overflow)?),
            Component::Prerelease => {
                let current = if v.pre.is_empty() { "rc.0" } else { v.pre.as_str() };
                let next = increment_last_number(current).ok_or_else(overflow)?;
                Version {
                    pre: Prerelease::new(&next).map_err(|e| invalid(version, e.to_string()))?,
                    build: BuildMetadata::EMPTY,
                    ..v
                }
            }
            Component::Build => {
                let current = if v.build.is_empty() { "build.0" } else { v.build.as_str() };
                let next = increment_last_number(current).ok_or_else(overflow)?;
                Version {
                    build: BuildMetadata::new(&next).map_err(|e| invalid(version, e.to_string()))?,
                    ..v
                }
            }
        };

        log::trace!("Bumped {:?} of {} to {}", component, version, bumped);
        Ok(bumped.to_string())
    }
}
