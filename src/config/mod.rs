//! Configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration for the to-do list application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Path to the JSON file holding the task list
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("tasks.json"),
        }
    }
}

impl Config {
    /// Load configuration from file, environment variables, or defaults
    pub fn load() -> crate::Result<Self> {
        // Try to load from config file specified in environment variable
        if let Ok(config_path) = env::var("TODO_CLI_CONFIG") {
            info!("Loading config from TODO_CLI_CONFIG: {}", config_path);
            return Self::from_file(&config_path);
        }

        // Try default config file locations
        let default_paths = vec![
            "todo.yaml",
            "todo.toml",
            "config/todo.yaml",
            "config/todo.toml",
        ];

        for path in default_paths {
            if Path::new(path).exists() {
                info!("Loading config from: {}", path);
                return Self::from_file(path);
            }
        }

        // Try environment variables
        if let Ok(config) = Self::from_env() {
            info!("Loaded config from environment variables");
            return Ok(config);
        }

        // Fall back to defaults
        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve the tasks file path, preferring an explicit override.
    ///
    /// When an override path is given the configuration is not loaded at
    /// all, so a broken config file cannot block an explicitly addressed
    /// store.
    pub fn resolve_data_file(override_path: Option<PathBuf>) -> crate::Result<PathBuf> {
        match override_path {
            Some(path) => Ok(path),
            None => Ok(Self::load()?.data_file),
        }
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                crate::TodoError::Config(format!("Failed to load config file: {}", e))
            })?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| crate::TodoError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();
        let mut found_any = false;

        if let Ok(val) = env::var("TODO_CLI_DATA_FILE") {
            config.data_file = PathBuf::from(val);
            found_any = true;
        }

        if !found_any {
            return Err(crate::TodoError::Config(
                "No environment variables found".to_string(),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(crate::TodoError::Config(
                "Data file path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
