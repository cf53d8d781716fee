//! Configuration handling

use crate::error::ConfigurationError;
use crate::lookup::{LookupTable, Region};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "PRODUCT_FORM_CONFIG";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Replaces the built-in state → city table
    pub regions: Option<Vec<Region>>,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
    /// Pretty-print submitted values in the log
    pub pretty_submissions: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("io", "product-form", "product-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Build the lookup table from the configured regions, or the defaults
    pub fn lookup_table(&self) -> Result<LookupTable, ConfigurationError> {
        match &self.regions {
            Some(regions) => LookupTable::new(regions.clone()),
            None => Ok(LookupTable::default()),
        }
    }
}
