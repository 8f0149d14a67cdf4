// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Sensor error types

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result of a sensor operation
pub type SensorResult<T> = Result<T, SensorError>;

/// Errors raised while building or reading a sensor
#[derive(Debug, Error)]
pub enum SensorError {
    /// Sensor index or path template is unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Sensor file missing, unreadable, or the read failed
    #[error("failed to read sensor file {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Sensor file content is not an integer literal, or does not fit an `i128`
    #[error("invalid sensor value {raw:?}: {source}")]
    Parse {
        /// Trimmed first line of the file
        raw: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },
}

impl SensorError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// True for [`SensorError::Configuration`]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// True for [`SensorError::Io`]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// True for [`SensorError::Parse`]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
