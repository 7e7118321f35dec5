//! Configuration loading from TOML/JSON

mod constants;

pub use constants::{
    CombatConstants, CoverTable, HitConstants, MoraleConstants, SuppressionConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load combat constants from a TOML file and validate them
pub fn load_constants(path: &Path) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Built-in constants shipped with the crate
pub fn default_constants() -> CombatConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_toml::<CombatConstants>(toml)
        .and_then(|c| c.validate().map(|_| c))
        .unwrap_or_else(|err| {
            tracing::warn!("bundled constants rejected ({err}), using compiled defaults");
            CombatConstants::default()
        })
}
