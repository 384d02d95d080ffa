//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treegrid/config.toml`
//! 3. Environment variables: `TREEGRID_*` prefix (e.g.
//!    `TREEGRID_DISPLAY__PLACEHOLDER`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::cli::error::{CliError, CliResult};

/// Grid rendering options for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph printed for placeholder cells
    pub placeholder: String,
    /// Prefix activated/collapsed cells with state markers
    pub markers: bool,
    /// Show node labels instead of raw names
    pub labels: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "·".into(),
            markers: true,
            labels: true,
        }
    }
}

/// Effective CLI settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub display: DisplayConfig,
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("TREEGRID")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CliError::Config {
                message: e.to_string(),
            })?;
        Ok(settings)
    }

    fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "treegrid").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
