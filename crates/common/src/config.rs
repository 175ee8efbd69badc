//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GifmakeError, GifmakeResult};

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory searched when an animation is requested by name.
    pub assets_dir: PathBuf,

    /// Default animation assembly settings.
    #[serde(default)]
    pub assembly: AssemblyDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default delay handling used when assembling animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyDefaults {
    /// Shortest on-screen time a frame may have (seconds).
    pub min_delay_secs: f64,

    /// Delay used when a frame carries no timing metadata (seconds).
    pub default_delay_secs: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gifmake=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            assembly: AssemblyDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AssemblyDefaults {
    fn default() -> Self {
        Self {
            min_delay_secs: 0.1,
            default_delay_secs: 0.1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AssemblyDefaults {
    /// Reject delay settings that would break millisecond quantization.
    ///
    /// Both values must lie between 1 ms and 655.35 s, the longest delay a
    /// GIF frame can declare.
    pub fn validate(&self) -> GifmakeResult<()> {
        for (name, value) in [
            ("min_delay_secs", self.min_delay_secs),
            ("default_delay_secs", self.default_delay_secs),
        ] {
            if !(0.001..=655.35).contains(&value) {
                return Err(GifmakeError::config(format!(
                    "{name} must be between 0.001 and 655.35 seconds, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> GifmakeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.assembly.validate()?;
        Ok(config)
    }

    /// Save config to the standard location, returning the path written.
    pub fn save(&self) -> GifmakeResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Write config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> GifmakeResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gifmake").join("config.json")
}

/// Default named-asset directory.
fn default_assets_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("gifmake").join("assets")
}
