// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! zonetemp - sysfs sensor readings as exact decimals
//!
//! Reads the kernel thermal zone temperature (or any file holding an
//! integer scaled by a power of ten) and returns it as a fixed-point
//! [`ScaledValue`]. Each [`Sensor`] resolves its path once and can cache
//! the first value it reads.
//!
//! ```no_run
//! use zonetemp::{Sensor, SensorKind};
//!
//! let mut zone = Sensor::new(SensorKind::Thermal, 0u32)?;
//! println!("{}", zone.cached_value()?);
//! # Ok::<(), zonetemp::SensorError>(())
//! ```

pub mod config;
pub mod error;
pub mod reading;
pub mod sensor;
pub mod template;
pub mod value;
pub mod variants;

// Re-exports for convenience
pub use config::{Config, SensorConfig};
pub use error::{SensorError, SensorResult};
pub use reading::SensorReading;
pub use sensor::{convert, read_temperature, read_temperature_with_template, Sensor, SensorIndex, SensorKind};
pub use template::{PathTemplate, THERMAL_ZONE_TEMPLATE};
pub use value::{ScaledValue, DEFAULT_PRECISION};
pub use variants::{CameraColorSensor, MicrophoneNoiseSensor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
