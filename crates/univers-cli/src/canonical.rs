//! Canonical command - print a specifier in canonical form.

use anyhow::Result;
use clap::Args;

use univers::VersionSpecifier;

use crate::Context;

#[derive(Args, Debug)]
pub struct CanonicalArgs {
    /// Version specifier, e.g. "semver: >= 1.0.0, ~>1.2.0"
    pub specifier: String,

    /// Print one range per line instead of the joined specifier
    #[arg(short, long)]
    pub ranges: bool,
}

pub fn lines(spec: &VersionSpecifier, ranges: bool) -> Vec<String> {
    if ranges {
        spec.ranges().iter().map(|r| r.to_string()).collect()
    } else {
        vec![spec.to_canonical_string()]
    }
}

pub fn execute(args: CanonicalArgs, ctx: &Context) -> Result<i32> {
    let spec = ctx.specifier(&args.specifier)?;
    for line in lines(&spec, args.ranges) {
        println!("{}", line);
    }
    Ok(0)
}
