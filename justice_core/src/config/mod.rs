//! Configuration and persistence - formula constants, the input field
//! registry, and the flat settings file

mod constants;
mod fields;
mod loadout;
mod save;

pub use constants::{
    ClampConstants, CritConstants, DamageConstants, FormulaConstants, HitConstants,
    MitigationConstants,
};
pub use fields::{FieldDef, ATTACKER_FIELDS, DEFENDER_FIELDS};
pub use loadout::Loadout;
pub use save::{SavedFields, SAVE_FILE};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration or save-file error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid number for {key}: '{value}'")]
    InvalidNumber { key: &'static str, value: String },
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
