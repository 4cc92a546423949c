//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/config.toml` - User-wide defaults
//! - Project: `.platform-gate/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Nothing in the
//! configuration changes what the gate allows or denies.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Gate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Use ANSI colors in human output (default: true)
    pub color: Option<bool>,

    /// Default message format (human, json)
    pub message_format: Option<String>,
}

/// Format of the diagnostics written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for MessageFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(MessageFormat::Human),
            "json" => Ok(MessageFormat::Json),
            _ => anyhow::bail!("invalid message format '{}', valid values: human, json", s),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
        if other.output.message_format.is_some() {
            self.output.message_format = other.output.message_format;
        }
    }

    /// Whether colored output is enabled.
    pub fn color(&self) -> bool {
        self.output.color.unwrap_or(true)
    }

    /// Parse the message format, ignoring invalid values.
    pub fn message_format(&self) -> Option<MessageFormat> {
        let raw = self.output.message_format.as_ref()?;
        match raw.parse() {
            Ok(format) => Some(format),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.platform-gate/config.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}
