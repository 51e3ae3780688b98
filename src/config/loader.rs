//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{join_errors, validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Parse configuration text. `.json` files use JSON, everything else TOML.
pub fn parse_config(content: &str, path: &Path) -> Result<ServerConfig, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(content)?
    } else {
        toml::from_str(content)?
    };
    Ok(config)
}

/// Load and validate configuration from a TOML or JSON file.
///
/// A missing `root` defaults to the directory holding the config file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content, path)?;

    let config_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    config.root = Some(match config.root.take() {
        Some(root) if root.is_absolute() => root,
        Some(root) => config_dir.join(root),
        None => config_dir.to_path_buf(),
    });

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
