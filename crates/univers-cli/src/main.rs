//! univers - query version specifiers from the command line

mod canonical;
mod config;
mod contains;
mod expand;
mod schemes;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use univers::{SchemeRegistry, VersionSpecifier};

use crate::config::UniversConfig;

#[derive(Parser, Debug)]
#[command(name = "univers", version, about = "Evaluate scheme-qualified version specifiers")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to the nearest univers.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check which versions a specifier contains
    Contains(contains::ContainsArgs),

    /// Print the canonical form of a specifier
    Canonical(canonical::CanonicalArgs),

    /// Show the ranges a pessimistic (~>) version expands to
    Expand(expand::ExpandArgs),

    /// List registered version schemes
    Schemes,
}

/// Registry and configuration shared by all commands
pub struct Context {
    pub registry: SchemeRegistry,
    pub config: UniversConfig,
}

impl Context {
    pub fn new(config: UniversConfig) -> Result<Self> {
        let registry = config.registry()?;
        Ok(Context { registry, config })
    }

    /// Parse a specifier, falling back to the configured default scheme when it has no prefix
    pub fn specifier(&self, spec: &str) -> Result<VersionSpecifier> {
        let parsed = match (&self.config.default_scheme, spec.contains(':')) {
            (Some(scheme), false) => VersionSpecifier::parse_with_scheme_in(&self.registry, scheme, spec),
            _ => VersionSpecifier::parse_in(&self.registry, spec),
        };
        parsed.with_context(|| format!("Invalid version specifier \"{}\"", spec))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&PathBuf>) -> Result<UniversConfig> {
    match path {
        Some(path) => UniversConfig::load_file(path),
        None => Ok(UniversConfig::load_from_cwd()?.unwrap_or_default()),
    }
}

fn run(cli: Cli) -> Result<i32> {
    let ctx = Context::new(load_config(cli.config.as_ref())?)?;

    match cli.command {
        Commands::Contains(args) => contains::execute(args, &ctx),
        Commands::Canonical(args) => canonical::execute(args, &ctx),
        Commands::Expand(args) => expand::execute(args, &ctx),
        Commands::Schemes => schemes::execute(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}
