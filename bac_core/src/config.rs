//! Configuration file support for the BAC simulator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bacsim/config.toml`.

use crate::{Error, Profile, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,
}

/// Default physiological profile, used when a scenario supplies none
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_sex")]
    pub sex: crate::Sex,

    #[serde(default = "default_weight_lbs")]
    pub weight_lbs: f64,

    #[serde(default = "default_height_inches")]
    pub height_inches: u32,

    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default)]
    pub chronic_drinker: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sex: default_sex(),
            weight_lbs: default_weight_lbs(),
            height_inches: default_height_inches(),
            age: default_age(),
            chronic_drinker: false,
        }
    }
}

impl From<&ProfileConfig> for Profile {
    fn from(config: &ProfileConfig) -> Self {
        Profile {
            sex: config.sex,
            weight_lbs: config.weight_lbs,
            height_inches: config.height_inches,
            age: config.age,
            chronic_drinker: config.chronic_drinker,
        }
    }
}

/// Timeline display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_timeline_hours")]
    pub hours: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            hours: default_timeline_hours(),
        }
    }
}

// Default value functions
fn default_sex() -> crate::Sex {
    Profile::default().sex
}

fn default_weight_lbs() -> f64 {
    Profile::default().weight_lbs
}

fn default_height_inches() -> u32 {
    Profile::default().height_inches
}

fn default_age() -> u32 {
    Profile::default().age
}

fn default_timeline_hours() -> u32 {
    6
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
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

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("bacsim").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the model cannot compute with
    pub fn validate(&self) -> Result<()> {
        self.default_profile().validate()?;
        if self.timeline.hours == 0 {
            return Err(Error::Config("timeline.hours must be at least 1".into()));
        }
        Ok(())
    }

    /// The default profile as a model input
    pub fn default_profile(&self) -> Profile {
        Profile::from(&self.profile)
    }
}
