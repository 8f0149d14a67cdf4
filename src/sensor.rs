// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! File-backed sensors
//!
//! A [`Sensor`] reads the first line of one pseudo-file, parses it as an
//! integer and scales it down by `10^precision`. The path is resolved
//! once at construction; nothing touches the filesystem until a read.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SensorConfig;
use crate::error::{SensorError, SensorResult};
use crate::template::{PathTemplate, THERMAL_ZONE_TEMPLATE};
use crate::value::{ScaledValue, DEFAULT_PRECISION};

/// Default path template for microphone noise level sensors
pub const MICROPHONE_NOISE_TEMPLATE: &str = "/path/to/microphone_noise{num}";

/// Default path template for webcam colour sensors
pub const CAMERA_COLOR_TEMPLATE: &str = "/path/to/camera_color{num}";

/// Index of a sensor file, substituted into its path template
///
/// Indexes are `u32`. Parsing from text trims whitespace and accepts a
/// leading `+`, but rejects negative numbers, values past `u32::MAX`
/// and `_` digit separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorIndex(u32);

impl SensorIndex {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SensorIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl TryFrom<i64> for SensorIndex {
    type Error = SensorError;

    fn try_from(index: i64) -> SensorResult<Self> {
        u32::try_from(index).map(Self).map_err(|_| {
            SensorError::configuration(format!(
                "sensor index {} is not a non-negative 32-bit integer",
                index
            ))
        })
    }
}

impl FromStr for SensorIndex {
    type Err = SensorError;

    fn from_str(s: &str) -> SensorResult<Self> {
        s.trim().parse::<u32>().map(Self).map_err(|e| {
            SensorError::configuration(format!("invalid sensor index {:?}: {}", s, e))
        })
    }
}

impl TryFrom<&str> for SensorIndex {
    type Error = SensorError;

    fn try_from(s: &str) -> SensorResult<Self> {
        s.parse()
    }
}

impl fmt::Display for SensorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of file-backed sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorKind {
    /// Kernel thermal zone (millidegrees Celsius)
    Thermal,
    /// Microphone noise level
    MicrophoneNoise,
    /// Webcam colour reading
    CameraColor,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [Self::Thermal, Self::MicrophoneNoise, Self::CameraColor];

    pub fn default_template(self) -> &'static str {
        match self {
            Self::Thermal => THERMAL_ZONE_TEMPLATE,
            Self::MicrophoneNoise => MICROPHONE_NOISE_TEMPLATE,
            Self::CameraColor => CAMERA_COLOR_TEMPLATE,
        }
    }

    pub fn precision(self) -> u32 {
        DEFAULT_PRECISION
    }

    /// Short identifier used in sensor ids
    pub fn label(self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::MicrophoneNoise => "microphone-noise",
            Self::CameraColor => "camera-color",
        }
    }

    /// Human readable name of the measured quantity
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Thermal => "Temperature",
            Self::MicrophoneNoise => "Microphone Noise Level",
            Self::CameraColor => "Camera Color",
        }
    }

    /// Unit of the scaled value, where known
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Thermal => Some("°C"),
            Self::MicrophoneNoise | Self::CameraColor => None,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a raw reading and scale it by `10^precision`
///
/// Readings are parsed as `i128`; literals past its range (39 digits and
/// up) are reported as [`SensorError::Parse`] with an overflow source.
pub fn convert(raw: &str, precision: u32) -> SensorResult<ScaledValue> {
    let value: i128 = raw.trim().parse().map_err(|source| SensorError::Parse {
        raw: raw.to_string(),
        source,
    })?;
    ScaledValue::new(value, precision)
}

/// Read the first line of `path`, trimmed
pub fn read_first_line(path: &Path) -> SensorResult<String> {
    let io_err = |source| SensorError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).map_err(io_err)?;
    Ok(line.trim().to_string())
}

/// A single file-backed sensor with a write-once value cache
#[derive(Debug, Clone)]
pub struct Sensor {
    kind: SensorKind,
    index: SensorIndex,
    template: PathTemplate,
    path: PathBuf,
    precision: u32,
    cache: Option<ScaledValue>,
}

impl Sensor {
    /// Sensor using the kind's default template
    pub fn new(kind: SensorKind, index: impl Into<SensorIndex>) -> SensorResult<Self> {
        Self::with_template(kind, index, None)
    }

    /// Sensor with an optional template override
    pub fn with_template(
        kind: SensorKind,
        index: impl Into<SensorIndex>,
        template: Option<&str>,
    ) -> SensorResult<Self> {
        Self::build(kind, index.into(), template, kind.precision())
    }

    /// Sensor using the template and precision from configuration
    pub fn from_config(
        kind: SensorKind,
        index: impl Into<SensorIndex>,
        config: &SensorConfig,
    ) -> SensorResult<Self> {
        Self::build(kind, index.into(), Some(config.template_for(kind)), config.precision)
    }

    fn build(
        kind: SensorKind,
        index: SensorIndex,
        template: Option<&str>,
        precision: u32,
    ) -> SensorResult<Self> {
        // Fail early rather than on the first read.
        ScaledValue::new(0, precision)?;

        let template = PathTemplate::parse(template.unwrap_or(kind.default_template()))?;
        let path = template.resolve(index);
        trace!("{} sensor {} resolved to {}", kind, index, path.display());

        Ok(Self {
            kind,
            index,
            template,
            path,
            precision,
            cache: None,
        })
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn index(&self) -> SensorIndex {
        self.index
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Resolved file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Identifier such as `thermal-0`
    pub fn id(&self) -> String {
        format!("{}-{}", self.kind.label(), self.index)
    }

    /// Read the trimmed first line of the sensor file, unparsed
    pub fn read_raw(&self) -> SensorResult<String> {
        let raw = read_first_line(&self.path)?;
        debug!("read {:?} from {}", raw, self.path.display());
        Ok(raw)
    }

    /// Convert a raw reading using this sensor's precision
    pub fn convert(&self, raw: &str) -> SensorResult<ScaledValue> {
        convert(raw, self.precision)
    }

    /// Read and convert, bypassing the cache
    pub fn scaled_value(&self) -> SensorResult<ScaledValue> {
        let raw = self.read_raw()?;
        self.convert(&raw)
    }

    /// Value from the first successful read; later calls never touch the file
    pub fn cached_value(&mut self) -> SensorResult<ScaledValue> {
        if let Some(value) = self.cache {
            trace!("cache hit for {}", self.id());
            return Ok(value);
        }

        let value = self.scaled_value()?;
        self.cache = Some(value);
        Ok(value)
    }

    /// Cached value, if one has been stored
    pub fn cached(&self) -> Option<ScaledValue> {
        self.cache
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}

/// One uncached read of thermal zone `index`
pub fn read_temperature(index: impl Into<SensorIndex>) -> SensorResult<ScaledValue> {
    read_temperature_with_template(index, THERMAL_ZONE_TEMPLATE)
}

/// One uncached thermal read through a custom template
pub fn read_temperature_with_template(
    index: impl Into<SensorIndex>,
    template: &str,
) -> SensorResult<ScaledValue> {
    Sensor::with_template(SensorKind::Thermal, index, Some(template))?.scaled_value()
}
