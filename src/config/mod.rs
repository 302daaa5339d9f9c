// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use f2p_showcase::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the showcase at a custom catalog
//! config.catalog_path = Some(PathBuf::from("my_games.toml"));
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::{default_lanes, LaneSpec};
use crate::error::Result;
use defaults::{APP_NAME, CONFIG_FILE, DEFAULT_SHOW_FEATURED_LANE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file to load instead of the bundled one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub show_featured_lane: Option<bool>,
    /// Platform lanes in display order.
    #[serde(default)]
    pub lanes: Option<Vec<LaneSpec>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            show_featured_lane: Some(DEFAULT_SHOW_FEATURED_LANE),
            lanes: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn show_featured_lane(&self) -> bool {
        self.show_featured_lane.unwrap_or(DEFAULT_SHOW_FEATURED_LANE)
    }

    /// Configured lanes, or the four platform lanes when unset.
    #[must_use]
    pub fn lanes(&self) -> Vec<LaneSpec> {
        self.lanes.clone().unwrap_or_else(default_lanes)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user configuration, or defaults when no settings file exists.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// # Errors
///
/// Returns an error if the settings file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. Unparsable content falls back to defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Writes a settings file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
