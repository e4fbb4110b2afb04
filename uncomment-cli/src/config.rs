//! Configuration module for the uncomment CLI.
//!
//! This module handles loading configuration settings for the uncomment
//! application from an `uncomment.toml` file.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, UncommentError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "uncomment.toml";

/// Source file extension processed when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = "cs";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extension of the files to uncomment, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Abort the run on the first file that cannot be read or written.
    #[serde(default)]
    pub fail_fast: bool,

    /// Number of files processed in parallel; `0` means one per CPU.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_jobs() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            fail_fast: false,
            jobs: default_jobs(),
        }
    }
}

/// Resolves a job count, mapping `0` to the number of available CPUs.
pub fn resolve_jobs(jobs: usize) -> usize {
    match jobs {
        0 => get_num_cpus(),
        n => n,
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(UncommentError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            UncommentError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that configured values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(UncommentError::Validation(
                "extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("uncomment").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("uncomment").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
