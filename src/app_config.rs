use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// How shifted timestamps that fall below zero are corrected
    #[serde(default)]
    pub negative_wrap: NegativeWrap,

    /// Extension of the files to process, matched case-insensitively
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Line terminator used when writing output files
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            negative_wrap: NegativeWrap::default(),
            extension: default_extension(),
            line_ending: LineEnding::default(),
        }
    }
}

impl Config {
    /// Load the config at `path`, writing a default one there if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config: Config = serde_json::from_reader(BufReader::new(file))
                .map_err(ConfigError::from)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }
        Ok(())
    }

    /// Extension without a leading dot
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Correction applied to shifted timestamps below zero
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeWrap {
    /// Add two hours once; values still negative are left unshifted
    #[default]
    TwoHours,
    /// Wrap into a 24 hour day
    ModuloDay,
}

/// Output line terminator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Reuse the terminator found in the input file
    #[default]
    Preserve,
    Lf,
    Crlf,
}

impl LineEnding {
    /// Concrete terminator for a file whose content is `input`
    pub fn resolve(&self, input: &str) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Preserve if input.contains("\r\n") => "\r\n",
            LineEnding::Preserve => "\n",
        }
    }
}

fn default_extension() -> String {
    "srt".to_string()
}
