use crate::directory::SortKey;
use crate::error::{RegistryError, Result, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const CONFIG_KEYS: &[&str] = &["default-sort", "placeholder-image"];

/// Configuration for the registry, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Sort applied by `list` when no `--sort` is given (e.g. "name-asc")
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Image reference shown for schools registered without an image
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_sort() -> String {
    SortKey::default().to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl RegistryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StorageError::Io)?;
        let config: RegistryConfig =
            serde_json::from_str(&content).map_err(StorageError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StorageError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StorageError::Serialization)?;
        fs::write(config_path, content).map_err(StorageError::Io)?;
        Ok(())
    }

    /// The configured default sort. Falls back to `name-asc` if the stored value is bad.
    pub fn sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-sort" => Some(self.default_sort.clone()),
            "placeholder-image" => Some(self.placeholder_image.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                let sort: SortKey = value.parse()?;
                self.default_sort = sort.to_string();
            }
            "placeholder-image" => {
                if value.trim().is_empty() {
                    return Err(RegistryError::Api(
                        "placeholder-image cannot be empty".to_string(),
                    ));
                }
                self.placeholder_image = value.to_string();
            }
            other => {
                return Err(RegistryError::Api(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.default_sort, "name-asc");
        assert_eq!(config.placeholder_image, "/placeholder.svg");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RegistryConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = RegistryConfig::default();
        config.set("default-sort", "state-desc").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = RegistryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, "state-desc");
        assert_eq!(loaded.sort_key().to_string(), "state-desc");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"placeholder_image": "/blank.png"}"#,
        )
        .unwrap();
        let loaded = RegistryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, "name-asc");
        assert_eq!(loaded.placeholder_image, "/blank.png");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = RegistryConfig::default();
        assert!(config.set("default-sort", "size-asc").is_err());
        assert!(config.set("placeholder-image", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_bad_stored_sort_falls_back() {
        let config = RegistryConfig {
            default_sort: "bogus".to_string(),
            ..RegistryConfig::default()
        };
        assert_eq!(config.sort_key(), SortKey::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = RegistryConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some());
        }
        assert_eq!(config.get("nope"), None);
    }
}
