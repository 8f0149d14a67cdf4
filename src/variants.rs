// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Microphone noise and webcam colour sensors
//!
//! Both read their files through the same path as the thermal sensor.

use std::ops::{Deref, DerefMut};

use crate::config::SensorConfig;
use crate::error::SensorResult;
use crate::sensor::{Sensor, SensorIndex, SensorKind};
use crate::value::ScaledValue;

macro_rules! file_sensor {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $accessor:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: Sensor,
        }

        impl $name {
            pub fn new(index: impl Into<SensorIndex>) -> SensorResult<Self> {
                Self::with_template(index, None)
            }

            pub fn with_template(
                index: impl Into<SensorIndex>,
                template: Option<&str>,
            ) -> SensorResult<Self> {
                Ok(Self {
                    inner: Sensor::with_template($kind, index, template)?,
                })
            }

            pub fn from_config(
                index: impl Into<SensorIndex>,
                config: &SensorConfig,
            ) -> SensorResult<Self> {
                Ok(Self {
                    inner: Sensor::from_config($kind, index, config)?,
                })
            }

            #[doc = concat!("Current ", $what, ", read fresh from the file")]
            pub fn $accessor(&self) -> SensorResult<ScaledValue> {
                self.inner.scaled_value()
            }

            pub fn as_sensor_mut(&mut self) -> &mut Sensor {
                &mut self.inner
            }

            pub fn into_sensor(self) -> Sensor {
                self.inner
            }
        }

        impl Deref for $name {
            type Target = Sensor;

            fn deref(&self) -> &Sensor {
                &self.inner
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Sensor {
                &mut self.inner
            }
        }

        impl From<$name> for Sensor {
            fn from(sensor: $name) -> Sensor {
                sensor.inner
            }
        }
    };
}

// TODO: noise_level() reuses the millidegree conversion; replace it once
// the microphone driver's file format is known.
file_sensor!(
    /// Microphone noise level sensor
    MicrophoneNoiseSensor,
    SensorKind::MicrophoneNoise,
    noise_level,
    "noise level"
);

// TODO: camera_color() reuses the millidegree conversion; replace it once
// the webcam colour file format is known.
file_sensor!(
    /// Webcam colour sensor
    CameraColorSensor,
    SensorKind::CameraColor,
    camera_color,
    "colour reading"
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_default_templates() {
        let noise = MicrophoneNoiseSensor::new(0u32).unwrap();
        assert_eq!(noise.path(), Path::new("/path/to/microphone_noise0"));
        assert_eq!(noise.kind(), SensorKind::MicrophoneNoise);

        let color = CameraColorSensor::new(3u32).unwrap();
        assert_eq!(color.path(), Path::new("/path/to/camera_color3"));
        assert_eq!(color.kind(), SensorKind::CameraColor);
    }

    #[test]
    fn test_accessors_match_base_conversion() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mic1"), "35500\n").unwrap();
        fs::write(dir.path().join("cam1"), "-1000\n").unwrap();

        let mic_tpl = format!("{}/mic{{num}}", dir.path().display());
        let cam_tpl = format!("{}/cam{{num}}", dir.path().display());

        let noise = MicrophoneNoiseSensor::with_template(1u32, Some(&mic_tpl)).unwrap();
        assert_eq!(noise.noise_level().unwrap().to_string(), "35.500");
        assert_eq!(noise.noise_level().unwrap(), noise.scaled_value().unwrap());

        let color = CameraColorSensor::with_template(1u32, Some(&cam_tpl)).unwrap();
        assert_eq!(color.camera_color().unwrap().to_string(), "-1.000");
    }

    #[test]
    fn test_cache_through_variant() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mic0");
        fs::write(&file, "1000").unwrap();

        let tpl = format!("{}/mic{{num}}", dir.path().display());
        let mut noise = MicrophoneNoiseSensor::with_template(0u32, Some(&tpl)).unwrap();

        let cached = noise.cached_value().unwrap();
        fs::write(&file, "2000").unwrap();

        assert_eq!(noise.cached_value().unwrap(), cached);
        assert_eq!(noise.as_sensor_mut().cached_value().unwrap(), cached);
        assert!(noise.is_cached());
        assert_eq!(noise.noise_level().unwrap().to_string(), "2.000");
    }

    #[test]
    fn test_from_config() {
        let mut config = SensorConfig::default();
        config.camera_color_template = "/tmp/cam{num}/value".to_string();
        config.precision = 1;

        let color = CameraColorSensor::from_config(4u32, &config).unwrap();
        assert_eq!(color.path(), Path::new("/tmp/cam4/value"));
        assert_eq!(color.precision(), 1);
        assert_eq!(color.convert("355").unwrap().to_string(), "35.5");
    }

    #[test]
    fn test_missing_default_path_is_io_error() {
        let noise = MicrophoneNoiseSensor::new(0u32).unwrap();
        assert!(noise.noise_level().unwrap_err().is_io());
    }
}
