use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use univers::SchemeRegistry;

pub const CONFIG_FILE: &str = "univers.toml";

/// The univers configuration file structure (univers.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UniversConfig {
    /// Scheme used for specifiers written without a `scheme:` prefix
    pub default_scheme: Option<String>,

    /// Extra scheme names, mapped to a registered scheme (e.g. npm = "semver")
    pub aliases: BTreeMap<String, String>,
}

impl UniversConfig {
    /// Load configuration from univers.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Builtin schemes plus the configured aliases
    pub fn registry(&self) -> Result<SchemeRegistry> {
        let mut registry = SchemeRegistry::builtin();
        for (alias, target) in &self.aliases {
            registry
                .alias(alias, target)
                .with_context(|| format!("Invalid alias {} = \"{}\" in {}", alias, target, CONFIG_FILE))?;
        }
        Ok(registry)
    }
}
