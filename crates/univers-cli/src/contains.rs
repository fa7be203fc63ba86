//! Contains command - check versions against a specifier.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use univers::{SchemeRegistry, VersionSpecifier};

use crate::Context;

#[derive(Args, Debug)]
pub struct ContainsArgs {
    /// Version specifier, e.g. "semver:>=1.0.0,<2.0.0"
    pub specifier: String,

    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

/// One line per version, `true` when every version is contained
pub fn report(
    registry: &SchemeRegistry,
    spec: &VersionSpecifier,
    versions: &[String],
) -> Result<(Vec<String>, bool)> {
    let mut lines = Vec::with_capacity(versions.len());
    let mut all = true;

    for version in versions {
        let contained = spec
            .contains_str_in(registry, version)
            .with_context(|| format!("Invalid {} version \"{}\"", spec.scheme(), version))?;
        all &= contained;
        lines.push(format!("{}\t{}", version, if contained { "yes" } else { "no" }));
    }

    Ok((lines, all))
}

pub fn execute(args: ContainsArgs, ctx: &Context) -> Result<i32> {
    let spec = ctx.specifier(&args.specifier)?;
    log::debug!("Checking {} version(s) against {}", args.versions.len(), spec);

    let (lines, all) = report(&ctx.registry, &spec, &args.versions)?;
    for line in lines {
        match line.strip_suffix("\tno") {
            Some(version) => println!("{}\t{}", version, "no".red()),
            None => println!("{}", line.green()),
        }
    }

    Ok(if all { 0 } else { 1 })
}
