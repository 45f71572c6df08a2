use crate::error::{OceanError, Result};
use crate::model::Priority;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

/// Client configuration, stored in `<data_dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OceanConfig {
    /// Priority for new todos when none is given.
    #[serde(default)]
    pub default_priority: Priority,

    /// Ask before `clear-all` wipes the list.
    #[serde(default = "default_confirm_clear_all")]
    pub confirm_clear_all: bool,
}

fn default_confirm_clear_all() -> bool {
    true
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            confirm_clear_all: default_confirm_clear_all(),
        }
    }
}

impl OceanConfig {
    pub const KEYS: [&'static str; 2] = ["default-priority", "confirm-clear-all"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OceanError::Io)?;
        let config: OceanConfig =
            serde_json::from_str(&content).map_err(OceanError::Serialization)?;
        Ok(config)
    }

    /// Like [`OceanConfig::load`], but an unreadable or corrupt file logs a
    /// warning and yields defaults. The next `save` overwrites it.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(&config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config, using defaults");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OceanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OceanError::Serialization)?;
        fs::write(config_path, content).map_err(OceanError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-priority" => Some(self.default_priority.to_string()),
            "confirm-clear-all" => Some(self.confirm_clear_all.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-priority" => {
                self.default_priority = value.parse().map_err(OceanError::Config)?;
            }
            "confirm-clear-all" => {
                self.confirm_clear_all = parse_bool(value)
                    .ok_or_else(|| OceanError::Config(format!("Expected true or false, got {}", value)))?;
            }
            other => return Err(OceanError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = OceanConfig::default();
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(config.confirm_clear_all);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = OceanConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, OceanConfig::default());
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{oops").unwrap();

        assert!(OceanConfig::load(dir.path()).is_err());
        assert_eq!(OceanConfig::load_or_default(dir.path()), OceanConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = OceanConfig::default();
        config.set("default-priority", "high").unwrap();
        config.set("confirm-clear-all", "no").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = OceanConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_priority, Priority::High);
        assert!(!loaded.confirm_clear_all);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: OceanConfig = serde_json::from_str(r#"{"default_priority":"low"}"#).unwrap();
        assert_eq!(parsed.default_priority, Priority::Low);
        assert!(parsed.confirm_clear_all);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = OceanConfig::default();
        assert!(config.set("default-priority", "urgent").is_err());
        assert!(config.set("confirm-clear-all", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, OceanConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = OceanConfig::default();
        assert_eq!(config.get("default-priority").as_deref(), Some("medium"));
        assert_eq!(config.get("confirm-clear-all").as_deref(), Some("true"));
        assert_eq!(config.get("theme"), None);
    }
}
