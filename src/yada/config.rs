use crate::error::{Result, YadaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
const DEFAULT_NOTES_FILE: &str = "notes.txt";
const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Configuration for yada, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YadaConfig {
    /// File name of the address book inside the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the notebook inside the data directory
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// How many days ahead `birthdays` looks when no window is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: u32,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

impl Default for YadaConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}

/// Keys understood by `config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &["contacts-file", "notes-file", "birthday-window"];

impl YadaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(YadaError::Io)?;
        let config: YadaConfig =
            serde_json::from_str(&content).map_err(YadaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(YadaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(YadaError::Serialization)?;
        fs::write(config_path, content).map_err(YadaError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "contacts-file" => Ok(self.contacts_file.clone()),
            "notes-file" => Ok(self.notes_file.clone()),
            "birthday-window" => Ok(self.birthday_window_days.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "contacts-file" => self.contacts_file = file_name(key, value)?,
            "notes-file" => self.notes_file = file_name(key, value)?,
            "birthday-window" => {
                self.birthday_window_days = value.parse().map_err(|_| {
                    YadaError::Api(format!(
                        "birthday-window must be a number of days, got {:?}",
                        value
                    ))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> YadaError {
    YadaError::Api(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

// Data files always live directly in the data directory.
fn file_name(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() || value.contains(['/', '\\']) {
        return Err(YadaError::Api(format!(
            "{} must be a plain file name, got {:?}",
            key, value
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = YadaConfig::default();
        assert_eq!(config.contacts_file, "contacts.json");
        assert_eq!(config.notes_file, "notes.txt");
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = YadaConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, YadaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = YadaConfig::default();
        config.set("birthday-window", "14").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = YadaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.birthday_window_days, 14);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"notes_file":"n.txt"}"#).unwrap();
        let loaded = YadaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.notes_file, "n.txt");
        assert_eq!(loaded.contacts_file, "contacts.json");
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = YadaConfig::default();
        config.set("notes-file", " memo.txt ").unwrap();
        assert_eq!(config.get("notes-file").unwrap(), "memo.txt");
        assert!(config.set("notes-file", "../escape.txt").is_err());
        assert!(config.set("birthday-window", "soon").is_err());
        assert!(matches!(config.get("color"), Err(YadaError::Api(_))));
    }
}
