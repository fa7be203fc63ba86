//! Composer (PHP `version_compare`) ordering

use std::cmp::Ordering;

use super::VersionScheme;
use crate::VersionParseError;

const NAME: &str = "composer";
const BRANCH_PREFIX: &str = "dev-";

/// The `composer` scheme.
///
/// Versions are compared part by part the way PHP's `version_compare` does:
/// numbers numerically, stability words as `dev < alpha < beta < RC < stable < patch`.
/// `dev-` branches sort below every numbered version.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposerScheme;

impl VersionScheme for ComposerScheme {
    fn name(&self) -> &str {
        NAME
    }

    fn parse(&self, text: &str) -> Result<String, VersionParseError> {
        if text.is_empty() {
            return Err(VersionParseError::Empty {
                scheme: NAME.to_string(),
            });
        }

        let invalid = |reason: &str| VersionParseError::InvalidVersion {
            scheme: NAME.to_string(),
            version: text.to_string(),
            reason: reason.to_string(),
        };

        if let Some(branch) = text.strip_prefix(BRANCH_PREFIX) {
            if branch.is_empty() {
                return Err(invalid("empty branch name"));
            }
            return Ok(text.to_string());
        }

        if text.chars().any(|c| c.is_whitespace() || c == ',' || c == '@') {
            return Err(invalid("unexpected character"));
        }

        let stripped = match text.strip_prefix(['v', 'V']) {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => text,
        };
        if !stripped.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("expected a leading number"));
        }

        Ok(stripped.to_string())
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (a.starts_with(BRANCH_PREFIX), b.starts_with(BRANCH_PREFIX)) {
            (true, true) => a.cmp(b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_versions(a, b),
        }
    }
}

/// Compare two version strings (PHP version_compare compatible)
fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut a_iter = PartIter::new(a);
    let mut b_iter = PartIter::new(b);

    loop {
        let (a_part, b_part) = match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ordering::Equal,
            (a_part, b_part) => (a_part.unwrap_or(Part::EMPTY), b_part.unwrap_or(Part::EMPTY)),
        };

        let cmp = compare_part(a_part, b_part);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PartKind {
    Digit,
    Alpha,
}

#[derive(Clone, Copy)]
struct Part<'a> {
    kind: PartKind,
    text: &'a str,
}

impl Part<'static> {
    const EMPTY: Part<'static> = Part {
        kind: PartKind::Alpha,
        text: "",
    };
}

/// Splits a version into runs of digits and runs of letters, skipping separators.
struct PartIter<'a> {
    input: &'a str,
    index: usize,
}

impl<'a> PartIter<'a> {
    fn new(input: &'a str) -> Self {
        PartIter { input, index: 0 }
    }
}

impl<'a> Iterator for PartIter<'a> {
    type Item = Part<'a>;

    fn next(&mut self) -> Option<Part<'a>> {
        let bytes = self.input.as_bytes();
        while self.index < bytes.len() && !bytes[self.index].is_ascii_alphanumeric() {
            self.index += 1;
        }
        let first = *bytes.get(self.index)?;

        let start = self.index;
        let is_digit = first.is_ascii_digit();
        self.index += bytes[start..]
            .iter()
            .take_while(|b| if is_digit { b.is_ascii_digit() } else { b.is_ascii_alphabetic() })
            .count();

        Some(Part {
            kind: if is_digit { PartKind::Digit } else { PartKind::Alpha },
            text: &self.input[start..self.index],
        })
    }
}

fn compare_part(a: Part<'_>, b: Part<'_>) -> Ordering {
    match (a.kind, b.kind) {
        (PartKind::Digit, PartKind::Digit) => compare_digits(a.text, b.text),
        (PartKind::Digit, PartKind::Alpha) => Ordering::Greater,
        (PartKind::Alpha, PartKind::Digit) => Ordering::Less,
        (PartKind::Alpha, PartKind::Alpha) => special_order(a.text).cmp(&special_order(b.text)),
    }
}

/// Numeric order of two digit runs of any length
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn special_order(s: &str) -> i32 {
    let s = s.to_ascii_lowercase();
    match s.as_str() {
        "dev" => 0,
        "alpha" | "a" => 1,
        "beta" | "b" => 2,
        "rc" => 3,
        "patch" | "pl" | "p" => 5,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        let a = ComposerScheme.parse(a).unwrap();
        let b = ComposerScheme.parse(b).unwrap();
        ComposerScheme.compare(&a, &b)
    }

    #[test]
    fn test_parse() {
        assert_eq!(ComposerScheme.parse("1.2.3").unwrap(), "1.2.3");
        assert_eq!(ComposerScheme.parse("v1.2").unwrap(), "1.2");
        assert_eq!(ComposerScheme.parse("dev-master").unwrap(), "dev-master");
        assert!(ComposerScheme.parse("").is_err());
        assert!(ComposerScheme.parse("dev-").is_err());
        assert!(ComposerScheme.parse("stable").is_err());
        assert!(ComposerScheme.parse("1.0@beta").is_err());
    }

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(cmp("1.25.0", "1.24.0"), Ordering::Greater);
        assert_eq!(cmp("1.25.0", "1.25.0"), Ordering::Equal);
        assert_eq!(cmp("1.0.0", "1.2"), Ordering::Less);
        assert_eq!(cmp("1.9999.9999", "2.0"), Ordering::Less);
        assert_eq!(cmp("v0.1.97", "0.1.97"), Ordering::Equal);
    }

    #[test]
    fn test_long_numbers() {
        assert_eq!(cmp("1.99999999999999999999", "1.2"), Ordering::Greater);
        assert_eq!(cmp("1.2", "1.99999999999999999999"), Ordering::Less);
        assert_eq!(cmp("1.99999999999999999999", "1.99999999999999999998"), Ordering::Greater);
        assert_eq!(cmp("1.99999999999999999999", "1.99999999999999999999"), Ordering::Equal);
        assert_eq!(cmp("20260101000000000000", "9.0"), Ordering::Greater);
        assert_eq!(cmp("1.02", "1.2"), Ordering::Equal);
        assert_eq!(cmp("1.00", "1.0"), Ordering::Equal);
    }

    #[test]
    fn test_stability_ordering() {
        assert_eq!(cmp("2.1.0.0-dev", "2.1.0.0"), Ordering::Less);
        assert_eq!(cmp("2.1-dev", "2.1"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-beta"), Ordering::Less);
        assert_eq!(cmp("1.0.0-RC1", "1.0.0"), Ordering::Less);
        assert_eq!(cmp("1.2.3-pl1", "1.2.3"), Ordering::Greater);
        assert_eq!(cmp("1.25.0-beta2.1", "1.25.0-b.2.1"), Ordering::Equal);
        assert_eq!(cmp("1.25.0-b-2.1", "1.25.0-rc"), Ordering::Less);
    }

    #[test]
    fn test_branch_ordering() {
        assert_eq!(cmp("dev-foo", "1.26.0"), Ordering::Less);
        assert_eq!(cmp("1.26.0", "dev-foo"), Ordering::Greater);
        assert_eq!(cmp("dev-foo", "dev-foo"), Ordering::Equal);
        assert_ne!(cmp("dev-foo", "dev-bar"), Ordering::Equal);
    }

    #[test]
    fn test_not_structured() {
        assert!(ComposerScheme.as_structured().is_none());
    }
}
