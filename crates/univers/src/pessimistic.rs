//! Expansion of the pessimistic `~>` operator
//!
//! `~>2.0.8` means "at least 2.0.8 but below the next version that breaks
//! pessimistic compatibility" and expands to `>=2.0.8` and `<2.1.0`.
//!
//! The upper bound is found by walking the structural tuple
//! `(major, minor, patch, prerelease, build)`: at index `i`, if the component two
//! positions ahead is absent, the component mapped to `i` by [`BUMP_FOR_INDEX`]
//! is bumped. Numeric components are always present, so in practice a plain
//! release bumps minor, a pre-release bumps patch, and a version carrying both
//! pre-release and build metadata has no pessimistic upper bound.

use std::sync::Arc;

use crate::scheme::{Component, VersionScheme};
use crate::util::remove_whitespace;
use crate::{Error, Operator, Result, Version, VersionParseError, VersionRange};

/// The pessimistic operator token
pub const PESSIMISTIC_OPERATOR: &str = "~>";

/// Component bumped when the look-ahead test succeeds at the given index
const BUMP_FOR_INDEX: [Component; 4] = [
    Component::Build,
    Component::Minor,
    Component::Patch,
    Component::Prerelease,
];

/// How far ahead of the current index the absent-component test looks
const LOOK_AHEAD: usize = 2;

/// Return the version that is pessimistically greater than `version`.
///
/// ```
/// use univers::{pessimistic_upper_bound, SchemeRegistry};
///
/// let semver = SchemeRegistry::global().lookup("semver").unwrap();
/// assert_eq!(pessimistic_upper_bound(semver.as_ref(), "2.0.8").unwrap(), "2.1.0");
/// ```
pub fn pessimistic_upper_bound(scheme: &dyn VersionScheme, version: &str) -> Result<String> {
    let structured = scheme
        .as_structured()
        .ok_or_else(|| VersionParseError::Unstructured(scheme.name().to_string()))?;
    let components = structured.components(version)?;

    for (index, component) in BUMP_FOR_INDEX.iter().enumerate() {
        match components.get(index + LOOK_AHEAD) {
            Some(None) => {
                let upper = structured.bump(version, *component)?;
                log::trace!("Pessimistic upper bound of {} is {} (bumped {:?})", version, upper, component);
                return Ok(upper);
            }
            Some(Some(_)) => continue,
            None => break,
        }
    }

    Err(Error::NoPessimisticBound {
        version: version.to_string(),
    })
}

/// Expand a `~>` expression into its `(lower, upper)` ranges.
pub fn normalized_pessimistic_ranges(
    scheme: &Arc<dyn VersionScheme>,
    expression: &str,
) -> Result<(VersionRange, VersionRange)> {
    let expression = remove_whitespace(expression);

    let mut pieces = expression.split(PESSIMISTIC_OPERATOR);
    let operand = match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(""), Some(operand), None) if !operand.is_empty() => operand,
        _ => {
            return Err(Error::invalid_range(
                &expression,
                format!("expected \"{}\" followed by a version", PESSIMISTIC_OPERATOR),
            ))
        }
    };

    let lower = Version::with_scheme(scheme.clone(), operand).map_err(|source| Error::InvalidRangeVersion {
        range: expression.clone(),
        source,
    })?;
    let upper_text = pessimistic_upper_bound(scheme.as_ref(), lower.as_str())?;
    let upper = Version::with_scheme(scheme.clone(), &upper_text)?;

    log::debug!("Expanded {} to >={},<{}", expression, lower, upper);

    Ok((
        VersionRange::new(Operator::GreaterThanOrEqual, lower),
        VersionRange::new(Operator::LessThan, upper),
    ))
}
