//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use sanak_domain::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Language for kinship terms (`en` or `id`)
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "quiet" => Some(OutputFormat::Quiet),
            _ => None,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".sanak").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.settings.locale()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Change a setting by name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => {
                self.settings.color = value
                    .parse()
                    .map_err(|_| CliError::InvalidInput(format!("Expected true or false, got '{}'", value)))?;
            }
            "format" => {
                self.settings.format = OutputFormat::parse(value)
                    .ok_or_else(|| CliError::InvalidInput(format!("Unknown format '{}'", value)))?;
            }
            "locale" => {
                let locale = Locale::parse(value)
                    .ok_or_else(|| CliError::InvalidInput(format!("Unknown locale '{}'", value)))?;
                self.settings.locale = locale.as_str().to_string();
            }
            _ => return Err(CliError::InvalidInput(format!("Unknown setting '{}'", key))),
        }
        Ok(())
    }
}

impl Settings {
    /// The configured locale.
    pub fn locale(&self) -> Result<Locale> {
        Locale::parse(&self.locale)
            .ok_or_else(|| CliError::Config(format!("Unknown locale '{}'", self.locale)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            locale: default_locale(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_locale() -> String {
    Locale::default().as_str().to_string()
}
