//! Strata configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strata_tokens::{DesignSystemState, ExportFormat, ExportOptions};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "strata.toml";

/// Top-level Strata configuration (strata.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct StrataConfig {
    #[serde(default)]
    pub export: ExportConfig,
    /// Design system to export; missing sections fall back to the defaults
    #[serde(default)]
    pub design: DesignSystemState,
}

/// Export defaults, overridable from the command line
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_format")]
    pub format: ExportFormat,
    /// Output file or directory; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub options: ExportOptions,
}

fn default_format() -> ExportFormat {
    ExportFormat::Css
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output: None,
            options: ExportOptions::default(),
        }
    }
}

impl StrataConfig {
    /// Load configuration from a file, or from `strata.toml` inside a directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `strata init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`load_from_dir`](Self::load_from_dir), but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if config_path(path).exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `path` itself when it names a file, otherwise `path/strata.toml`.
pub fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}
