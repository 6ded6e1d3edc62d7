//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "decibel.toml";

/// CLI configuration file.
///
/// Everything is optional; command-line flags win over file values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Data directory for durable state.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter (e.g. "debug", "decibel_commerce=trace").
    #[serde(default)]
    pub log: Option<String>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Resolve the effective config: an explicit path must exist; the
    /// default file is used only if present.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(Path::new(path)),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
