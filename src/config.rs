//! User configuration loaded from `config.toml`.

use crate::calculator::format::MAX_FRACTION_DIGITS;
use crate::calculator::{DEFAULT_HISTORY_FRACTION_DIGITS, DEFAULT_MAX_DIGITS, EngineSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Directory name under the platform config dir.
const CONFIG_DIR: &str = "calcpad";

/// The config file name.
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// User configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum digits accepted while composing a number.
    pub max_digits: usize,
    /// Maximum fraction digits of numbers in the history trace.
    pub history_fraction_digits: usize,
    /// Copy the final display to the clipboard when the run ends.
    pub copy_result: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            history_fraction_digits: DEFAULT_HISTORY_FRACTION_DIGITS,
            copy_result: false,
        }
    }
}

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits == 0 {
            return Err(ConfigError::Invalid(
                "max_digits must be at least 1".to_string(),
            ));
        }
        if self.history_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "history_fraction_digits must be at most {MAX_FRACTION_DIGITS}"
            )));
        }
        Ok(())
    }

    /// Engine settings derived from this config.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            max_digits: self.max_digits,
            history_fraction_digits: self.history_fraction_digits,
        }
    }
}

/// Default location of the config file, e.g. `~/.config/calcpad/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config.
///
/// An explicit `path` must exist. Without one, the default location is used
/// and a missing file yields the default config.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = Config::from_toml_str(&text)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("max_digits = 12\ncopy_result = true\n").unwrap();
        assert_eq!(config.max_digits, 12);
        assert_eq!(config.history_fraction_digits, 8);
        assert!(config.copy_result);
        assert_eq!(config.engine_settings().max_digits, 12);
    }

    #[test]
    fn test_zero_digit_cap_rejected() {
        let err = Config::from_toml_str("max_digits = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_large_fraction_digits_rejected() {
        let err = Config::from_toml_str("history_fraction_digits = 70000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(
            err.to_string(),
            "invalid config: history_fraction_digits must be at most 17"
        );

        let config = Config::from_toml_str("history_fraction_digits = 17").unwrap();
        assert_eq!(config.history_fraction_digits, MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_toml_str("theme = \"dark\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = Config::from_toml_str("max_digits = \"nine\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_explicit_path() {
        let path = std::env::temp_dir().join("calcpad-missing-config-test.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_explicit_path() {
        let path = std::env::temp_dir().join(format!(
            "calcpad-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "history_fraction_digits = 3\n").unwrap();
        let config = load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.history_fraction_digits, 3);
        assert_eq!(config.max_digits, DEFAULT_MAX_DIGITS);
    }
}
