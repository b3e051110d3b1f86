// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and validation.

use crate::error::{ConfigError, Result, ScopeKitError};
use crate::rules::{LengthBounds, ScopeTemplate};
use std::path::{Path, PathBuf};

use super::schema::ScopeKitConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["scopekit.toml", ".scopekit.toml", ".config/scopekit.toml"];

/// Find the configuration file starting from a specific directory.
///
/// Walks up from `start_dir`, then falls back to the home directory and the
/// XDG config directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("scopekit").join("config.toml");
        if config_path.is_file() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration for the workspace at `root`, or defaults if none exists.
pub fn load_config(root: &Path) -> Result<ScopeKitConfig> {
    match find_config_file_from(root) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ScopeKitConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ScopeKitConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ScopeKitError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ScopeKitError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<ScopeKitConfig> {
    let config: ScopeKitConfig = toml::from_str(content).map_err(|e| {
        ScopeKitError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Check the invariants the rule provider relies on.
pub fn validate_config(config: &ScopeKitConfig) -> Result<()> {
    LengthBounds::new(config.rules.min_length, config.rules.max_length).map_err(|e| {
        ConfigError::InvalidValue {
            key: "rules.min_length/rules.max_length".to_string(),
            message: e.to_string(),
        }
    })?;

    ScopeTemplate::new(&config.scopes.template).map_err(|e| ConfigError::InvalidValue {
        key: "scopes.template".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}
