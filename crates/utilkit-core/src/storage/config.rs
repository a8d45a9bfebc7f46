//! Configuration management
//!
//! Output and merge settings stored in a TOML file.
//! Priority: CLI flag > UTILKIT_* environment variable > config.toml

use super::Result;
use crate::error::{ConfigError, StorageError};
use crate::utils::input::{EnvConfigReader, parse_flag};
use crate::value::merge::MergeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Keys accepted by [`Config::set`]
pub const CONFIG_KEYS: [&str; 2] = ["pretty", "deep_merge"];

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Pretty-print JSON output
    pub pretty: Option<bool>,
    /// Merge nested mappings recursively in `extend`
    pub deep_merge: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                path: config_path.to_string_lossy().to_string(),
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            path: config_path.to_string_lossy().to_string(),
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir.join(".config").join("utilkit").join("config.toml"))
    }

    /// Whether output should be pretty-printed
    pub fn effective_pretty(&self, cli_flag: bool) -> bool {
        cli_flag
            || EnvConfigReader::read_pretty()
                .or(self.pretty)
                .unwrap_or(false)
    }

    /// Merge mode for `extend`
    pub fn merge_mode(&self, cli_deep: bool) -> MergeMode {
        let deep = cli_deep
            || EnvConfigReader::read_deep_merge()
                .or(self.deep_merge)
                .unwrap_or(false);
        if deep {
            MergeMode::Deep
        } else {
            MergeMode::Shallow
        }
    }

    /// Set a value by key name
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        let flag = parse_flag(value).ok_or_else(|| ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        });

        match key {
            "pretty" => self.pretty = Some(flag?),
            "deep_merge" => self.deep_merge = Some(flag?),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::input::with_env_var;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.pretty.is_none());
        assert!(config.deep_merge.is_none());
    }

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();
        config.set("pretty", "true").expect("pretty accepts booleans");
        config.set("deep_merge", "off").expect("deep_merge accepts booleans");
        assert_eq!(config.pretty, Some(true));
        assert_eq!(config.deep_merge, Some(false));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_value() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("colour", "true"),
            Err(ConfigError::UnknownKey { .. })
        ));
        assert!(matches!(
            config.set("pretty", "sometimes"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_flag_wins() {
        let config = Config {
            pretty: Some(false),
            deep_merge: Some(false),
        };
        assert!(config.effective_pretty(true));
        assert_eq!(config.merge_mode(true), MergeMode::Deep);
    }

    #[test]
    fn test_env_overrides_file_pretty() {
        let config = Config {
            pretty: Some(true),
            deep_merge: None,
        };
        with_env_var("UTILKIT_PRETTY", "false", || {
            assert!(!config.effective_pretty(false));
            assert!(config.effective_pretty(true));
        });
    }

    #[test]
    fn test_env_overrides_file_deep_merge() {
        let config = Config {
            pretty: None,
            deep_merge: Some(false),
        };
        with_env_var("UTILKIT_DEEP_MERGE", "yes", || {
            assert_eq!(config.merge_mode(false), MergeMode::Deep);
        });
    }

    #[test]
    fn test_unparseable_env_falls_back_to_file() {
        let config = Config {
            pretty: Some(true),
            deep_merge: None,
        };
        with_env_var("UTILKIT_PRETTY", "sometimes", || {
            assert!(config.effective_pretty(false));
        });
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            pretty: Some(true),
            deep_merge: None,
        };
        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("nonexistent.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "pretty = [").expect("Failed to write config");

        let result = Config::load(Some(config_path.clone()));
        assert!(matches!(
            result,
            Err(StorageError::ConfigParseError { ref path, .. })
                if *path == config_path.to_string_lossy()
        ));
    }
}
