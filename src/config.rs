//! Configuration file handling for craftlogic.
//!
//! Loads configuration from `~/.config/craftlogic/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::measure::Unit;
use crate::render::{Materials, PatternStyle, RenderSettings};

/// Configuration file structure for craftlogic.
/// Loaded from ~/.config/craftlogic/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub pattern: PatternConfig,
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub materials: MaterialsConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct PatternConfig {
    #[serde(default)]
    pub style: PatternStyle,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct UnitsConfig {
    /// Unit used for custom dimensions when the user keeps the default.
    #[serde(default)]
    pub default: Unit,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct MaterialsConfig {
    pub yarn: Option<String>,
    pub hook: Option<String>,
}

/// Settings for one session after merging the file and CLI overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub render: RenderSettings,
    pub default_unit: Unit,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Merge with command-line overrides. `None` keeps the file's value.
    pub fn resolve(self, style: Option<PatternStyle>, unit: Option<Unit>) -> Settings {
        let defaults = Materials::default();
        let materials = Materials {
            yarn: non_blank(self.materials.yarn).unwrap_or(defaults.yarn),
            hook: non_blank(self.materials.hook).unwrap_or(defaults.hook),
        };

        Settings {
            render: RenderSettings::new(style.unwrap_or(self.pattern.style))
                .with_materials(materials),
            default_unit: unit.unwrap_or(self.units.default),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("craftlogic").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/craftlogic/config.toml")
        })
}
