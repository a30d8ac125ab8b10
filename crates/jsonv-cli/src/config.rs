//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Environment variables (see `logging`)
//! - Command-line arguments

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use clap::ValueEnum;
use jsonv_schema::ValidatorFactory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LogSettings,

    /// Custom leaf types usable in schemas, name to regex pattern
    pub types: BTreeMap<String, String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: String,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            progress: true,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file, format chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        match Self::default_config_paths().into_iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(&path)
                .map_err(|e| Error::config(format!("failed to load {}: {}", path.display(), e))),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".jsonv.yaml"),
            PathBuf::from(".jsonv.json"),
            PathBuf::from(".jsonv.toml"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let jsonv_dir = config_dir.join("jsonv");
            paths.push(jsonv_dir.join("config.yaml"));
            paths.push(jsonv_dir.join("config.json"));
            paths.push(jsonv_dir.join("config.toml"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".jsonv.yaml"));
            paths.push(home_dir.join(".jsonv.json"));
            paths.push(home_dir.join(".jsonv.toml"));
        }

        paths
    }

    /// Output format from the config file, if it names a known one
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true)
            .map_err(|_| Error::config(format!("unknown output format '{}'", self.output.format)))
    }

    /// Factory with every configured type registered
    pub fn factory(&self) -> Result<ValidatorFactory> {
        let mut factory = ValidatorFactory::new();
        for (name, pattern) in &self.types {
            let registered = factory
                .register_pattern(name.as_str(), pattern)
                .map_err(|e| Error::config(format!("type '{}' has an invalid pattern: {}", name, e)))?;
            if !registered {
                return Err(Error::config(format!("type name '{}' is reserved", name)));
            }
        }
        Ok(factory)
    }
}

/// Builder for creating configurations programmatically
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl ConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a regex-backed type
    pub fn add_type(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.config.types.insert(name.into(), pattern.into());
        self
    }

    /// Set the default output format
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.config.output.format = format.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
