//! Configuration file loading for the terminal front end.
//!
//! Settings are read from an optional TOML file. Every field has a
//! default, so a missing file or an empty table both work.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Draw pieces as Unicode chess glyphs instead of letters.
    #[serde(default)]
    pub unicode_pieces: bool,
    /// Shade the squares with ANSI colors.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Where the save command writes the game.
    #[serde(default = "default_save_path")]
    pub save_path: String,
}

fn default_color() -> bool {
    true
}

fn default_save_path() -> String {
    "arbiter_save.json".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            unicode_pieces: false,
            color: true,
            save_path: default_save_path(),
        }
    }
}

impl CliConfig {
    /// Loads settings from the given TOML file.
    ///
    /// A missing file is not an error; it yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot
    /// be read, or [`ConfigError::ParseError`] if it contains invalid
    /// TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
unicode_pieces = true
color = false
save_path = "games/current.json"
"#;
        let config: CliConfig = toml::from_str(content).unwrap();
        assert!(config.unicode_pieces);
        assert!(!config.color);
        assert_eq!(config.save_path, "games/current.json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(!config.unicode_pieces);
        assert!(config.color);
        assert_eq!(config.save_path, "arbiter_save.json");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: CliConfig = toml::from_str("unicode_pieces = true").unwrap();
        assert!(config.unicode_pieces);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result: Result<CliConfig, _> = toml::from_str("color = \"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = CliConfig::load_from("does_not_exist.toml").unwrap();
        assert_eq!(config.save_path, CliConfig::default().save_path);
    }
}
