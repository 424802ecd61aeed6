//! SavedFields - the flat JSON settings file

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default file name for persisted field values, written next to the binary
pub const SAVE_FILE: &str = "justice_save.json";

/// Raw field values exactly as typed, keyed by save key
///
/// Values stay strings end to end so a reload shows what the user entered,
/// not a float round trip of it. Only values that parse are ever saved, so a
/// load never has to repair garbage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedFields {
    values: BTreeMap<String, String>,
}

impl SavedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load saved fields, treating a missing file as an empty save
    pub fn load(path: &Path) -> Result<SavedFields, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SavedFields::new()),
            Err(err) => return Err(err.into()),
        };
        let saved: SavedFields = serde_json::from_str(&content)?;
        Ok(saved)
    }

    /// Write saved fields as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_file_loads_as_empty() {
        let path = env::temp_dir().join("justice_core_no_such_save.json");
        let _ = fs::remove_file(&path);

        let saved = SavedFields::load(&path).unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = env::temp_dir().join("justice_core_save_round_trip.json");

        let mut saved = SavedFields::new();
        saved.set("attack", "11194");
        saved.set("crit_dmg_bonus", "0.713");
        saved.save(&path).unwrap();

        let reloaded = SavedFields::load(&path).unwrap();
        assert_eq!(reloaded, saved);
        assert_eq!(reloaded.get("attack"), Some("11194"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_is_flat_json_text() {
        let path = env::temp_dir().join("justice_core_save_flat.json");

        let mut saved = SavedFields::new();
        saved.set("hit", "2300");
        saved.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"hit\": \"2300\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = env::temp_dir().join("justice_core_save_malformed.json");
        fs::write(&path, "not json at all").unwrap();

        let result = SavedFields::load(&path);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut saved = SavedFields::new();
        saved.set("block", "2000");
        saved.set("block", "2100");

        assert_eq!(saved.get("block"), Some("2100"));
        assert_eq!(saved.len(), 1);
    }
}
