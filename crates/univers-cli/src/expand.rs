//! Expand command - show the bounds of a pessimistic (~>) requirement.

use anyhow::{Context as _, Result};
use clap::Args;

use univers::{normalized_pessimistic_ranges, PESSIMISTIC_OPERATOR};

use crate::Context;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Version to expand, with or without the leading "~>"
    pub version: String,

    /// Scheme of the version
    #[arg(short, long, default_value = "semver")]
    pub scheme: String,
}

/// The `(lower, upper)` ranges for `version`, as text
pub fn expand(args: &ExpandArgs, ctx: &Context) -> Result<(String, String)> {
    let scheme = ctx.registry.lookup(&args.scheme)?;
    let expression = if args.version.trim_start().starts_with(PESSIMISTIC_OPERATOR) {
        args.version.clone()
    } else {
        format!("{}{}", PESSIMISTIC_OPERATOR, args.version)
    };

    let (lower, upper) = normalized_pessimistic_ranges(&scheme, &expression)
        .with_context(|| format!("Cannot expand \"{}\"", expression))?;
    Ok((lower.to_string(), upper.to_string()))
}

pub fn execute(args: ExpandArgs, ctx: &Context) -> Result<i32> {
    let (lower, upper) = expand(&args, ctx)?;
    println!("{}", lower);
    println!("{}", upper);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UniversConfig;

    fn args(version: &str, scheme: &str) -> ExpandArgs {
        ExpandArgs {
            version: version.to_string(),
            scheme: scheme.to_string(),
        }
    }

    #[test]
    fn test_expand() {
        let ctx = Context::new(UniversConfig::default()).unwrap();
        assert_eq!(
            expand(&args("2.0.8", "semver"), &ctx).unwrap(),
            (">=2.0.8".to_string(), "<2.1.0".to_string())
        );
        assert_eq!(
            expand(&args("~> 1.2.3-rc.1", "semver"), &ctx).unwrap(),
            (">=1.2.3-rc.1".to_string(), "<1.2.4".to_string())
        );
    }

    #[test]
    fn test_expand_errors() {
        let ctx = Context::new(UniversConfig::default()).unwrap();
        assert!(expand(&args("1.0", "composer"), &ctx).is_err());
        assert!(expand(&args("1.0.0", "pypi"), &ctx).is_err());
        assert!(expand(&args("1.2.3-rc.1+b.2", "semver"), &ctx).is_err());
    }
}
