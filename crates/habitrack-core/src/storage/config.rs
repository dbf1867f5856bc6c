//! TOML-based application configuration.
//!
//! Stored at `~/.config/habitrack/config.toml`. Currently covers the
//! advisory gateway (model choice and request timeout).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Advisory gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitrack/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_timeout_secs() -> u64 {
    15
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/habitrack"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write out and return the default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "advisor.model" => Some(self.advisor.model.clone()),
            "advisor.timeout_secs" => Some(self.advisor.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "advisor.model" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.into(),
                        message: "model must not be empty".into(),
                    });
                }
                self.advisor.model = value.to_string();
            }
            "advisor.timeout_secs" => {
                self.advisor.timeout_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.into(),
                        message: format!("cannot parse '{value}' as seconds"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.into())),
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.advisor.model, "gemini-2.5-flash");
        assert_eq!(parsed.advisor.timeout_secs, 15);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("advisor.model").as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(cfg.get("advisor.timeout_secs").as_deref(), Some("15"));
        assert!(cfg.get("advisor.missing_key").is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.advisor.timeout_secs, 15);
    }
}
