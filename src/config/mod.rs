// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

use crate::sensor::{SensorKind, CAMERA_COLOR_TEMPLATE, MICROPHONE_NOISE_TEMPLATE};
use crate::template::THERMAL_ZONE_TEMPLATE;
use crate::value::DEFAULT_PRECISION;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level
    pub log_level: String,

    /// Sensor configuration
    pub sensors: SensorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            sensors: SensorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {:?}", path))?;
        config
            .level()
            .with_context(|| format!("invalid config file {:?}", path))?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Parsed `log_level`
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log_level {:?}", self.log_level))
    }

    /// Get configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("zonetemp"))
            .unwrap_or_else(|| PathBuf::from("./config"))
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

/// Sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Path template for thermal zones
    pub thermal_template: String,

    /// Path template for microphone noise sensors
    pub microphone_noise_template: String,

    /// Path template for webcam colour sensors
    pub camera_color_template: String,

    /// Fractional digits encoded in the raw integer
    pub precision: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            thermal_template: THERMAL_ZONE_TEMPLATE.to_string(),
            microphone_noise_template: MICROPHONE_NOISE_TEMPLATE.to_string(),
            camera_color_template: CAMERA_COLOR_TEMPLATE.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SensorConfig {
    /// Template configured for a sensor kind
    pub fn template_for(&self, kind: SensorKind) -> &str {
        match kind {
            SensorKind::Thermal => self.thermal_template.as_str(),
            SensorKind::MicrophoneNoise => self.microphone_noise_template.as_str(),
            SensorKind::CameraColor => self.camera_color_template.as_str(),
        }
    }
}
