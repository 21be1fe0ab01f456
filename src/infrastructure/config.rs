// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration shared by the GUI and the terminal companion
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Path of the shared notes file; empty means the platform default
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
    /// Directory holding image assets; empty means next to the notes file
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
}

// Default value functions
fn default_notes_file() -> String { String::new() }
fn default_image_dir() -> String { String::new() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            image_dir: default_image_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.storage.notes_file, "");
        assert_eq!(config.storage.image_dir, "");
        assert!(config_path.exists());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let config = Config::default();
        config.save(&config_path).unwrap();

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[storage]"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[storage]
notes_file = "/shared/notes/sticky_notes.json"
image_dir = "/shared/notes/images"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.storage.notes_file, "/shared/notes/sticky_notes.json");
        assert_eq!(config.storage.image_dir, "/shared/notes/images");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let toml_content = r#"
[storage]
notes_file = "/custom/sticky_notes.json"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        // Specified value
        assert_eq!(config.storage.notes_file, "/custom/sticky_notes.json");
        // Default value
        assert_eq!(config.storage.image_dir, "");
    }

    #[test]
    fn given_empty_toml_when_loading_then_everything_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let original = Config {
            storage: StorageConfig {
                notes_file: "/test/sticky_notes.json".to_string(),
                image_dir: "/test/images".to_string(),
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}
