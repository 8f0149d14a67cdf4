// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Serialisable sensor readings

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sensor::{Sensor, SensorIndex, SensorKind};
use crate::value::ScaledValue;

/// A single value read from a sensor, with enough context to log or export it
#[derive(Debug, Clone, Serialize)]
pub struct SensorReading {
    pub sensor_id: String,
    pub kind: SensorKind,
    pub index: SensorIndex,
    pub path: PathBuf,
    pub value: ScaledValue,
    pub unit: Option<&'static str>,
    pub timestamp: DateTime<Utc>,
}

impl SensorReading {
    pub fn new(sensor: &Sensor, value: ScaledValue) -> Self {
        Self {
            sensor_id: sensor.id(),
            kind: sensor.kind(),
            index: sensor.index(),
            path: sensor.path().to_path_buf(),
            value,
            unit: sensor.kind().unit(),
            timestamp: Utc::now(),
        }
    }

    /// `Name: value` line as printed by the command line tool
    pub fn summary(&self) -> String {
        match self.unit {
            Some(unit) => format!("{}: {} {}", self.kind.display_name(), self.value, unit),
            None => format!("{}: {}", self.kind.display_name(), self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_json() {
        let sensor = Sensor::new(SensorKind::Thermal, 0u32).unwrap();
        let reading = SensorReading::new(&sensor, ScaledValue::new(35500, 3).unwrap());

        let json: serde_json::Value = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["sensor_id"], "thermal-0");
        assert_eq!(json["kind"], "thermal");
        assert_eq!(json["index"], 0);
        assert_eq!(json["value"], "35.500");
        assert_eq!(json["unit"], "°C");
        assert_eq!(json["path"], "/sys/class/thermal/thermal_zone0/temp");
    }

    #[test]
    fn test_summary() {
        let sensor = Sensor::new(SensorKind::MicrophoneNoise, 0u32).unwrap();
        let reading = SensorReading::new(&sensor, ScaledValue::new(-1000, 3).unwrap());
        assert_eq!(reading.summary(), "Microphone Noise Level: -1.000");

        let sensor = Sensor::new(SensorKind::CameraColor, 0u32).unwrap();
        let reading = SensorReading::new(&sensor, ScaledValue::new(42, 3).unwrap());
        assert_eq!(reading.summary(), "Camera Color: 0.042");
    }
}
