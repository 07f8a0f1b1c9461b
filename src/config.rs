//! User configuration, read from `config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub keypad: KeypadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Inserted between groups of three integer digits.
    pub group_separator: String,
    /// Operands longer than this are shown in compact form.
    pub compact_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    pub show: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: "\u{a0}".to_string(), // no-break space
            compact_threshold: 8,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self { show: true }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zcalc")
            .join("config.toml")
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the config at `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.group_separator, "\u{a0}");
        assert!(config.keypad.show);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ngroup_separator = \",\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display.group_separator, ",");
        assert_eq!(config.display.compact_threshold, 8);
        assert!(config.keypad.show);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[keypad]\nshow = \"sometimes\"").unwrap();

        assert!(matches!(Config::load_from(file.path()), Err(Error::Config(_))));
    }
}
