//! CLI configuration
//!
//! Settings come from an optional YAML file; command-line flags and
//! environment variables override whatever the file sets.

use pocketcalc::format::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::Cli;
use crate::error::{CliError, CliResult};

/// Effective application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Number display locale
    pub locale: Locale,
    /// Whether the interactive session starts with the help panel open
    pub show_help: bool,
    /// Log destination; `None` logs to stderr (headless) or nowhere (tui)
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            show_help: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parses configuration YAML
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        // An empty document means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text).map_err(|err| match err {
            CliError::Config { message } => {
                CliError::config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Builds the effective configuration for a parsed command line
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(locale) = cli.locale {
            self.locale = locale.into();
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    /// Pretty JSON rendering for the `config` command
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
