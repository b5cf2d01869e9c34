//! Configuration file support for the wellbeing journal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wellbeing/config.toml`.
//! The file is optional and read-only; nothing is ever written back.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted breathing time-unit, in milliseconds
const MAX_UNIT_MS: u64 = 60_000;

/// Application configuration
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub breathing: BreathingConfig,

    #[serde(default)]
    pub tips: TipsConfig,
}

/// Breathing exercise timing
#[derive(Clone, Debug, Deserialize)]
pub struct BreathingConfig {
    /// Length of one countdown tick in milliseconds
    #[serde(default = "default_unit_ms")]
    pub unit_ms: u64,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            unit_ms: default_unit_ms(),
        }
    }
}

impl BreathingConfig {
    pub fn unit(&self) -> Duration {
        Duration::from_millis(self.unit_ms)
    }
}

/// Extra self-care tips appended to the built-in catalog
#[derive(Clone, Debug, Deserialize, Default)]
pub struct TipsConfig {
    #[serde(default)]
    pub custom: Vec<String>,
}

fn default_unit_ms() -> u64 {
    1000
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("wellbeing").join("config.toml"))
    }

    /// Check values that parse fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.breathing.unit_ms > MAX_UNIT_MS {
            return Err(Error::Config(format!(
                "breathing.unit_ms must be at most {} (got {})",
                MAX_UNIT_MS, self.breathing.unit_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.breathing.unit_ms, 1000);
        assert_eq!(config.breathing.unit(), Duration::from_secs(1));
        assert!(config.tips.custom.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[tips]
custom = ["Hungry? Eat something warm."]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tips.custom.len(), 1);
        assert_eq!(config.breathing.unit_ms, 1000); // default
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[breathing]\nunit_ms = 0").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.breathing.unit_ms, 0);
    }

    #[test]
    fn test_rejects_huge_unit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[breathing]\nunit_ms = 3600000").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[breathing\nunit_ms = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
