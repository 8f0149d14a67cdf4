// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Exact fixed-point values
//!
//! Sysfs reports most quantities as integers scaled by a power of ten
//! (millidegrees Celsius for thermal zones). [`ScaledValue`] keeps the raw
//! integer and the exponent so the decimal is exact; nothing on the
//! conversion path goes through floating point.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::error::{SensorError, SensorResult};

/// Number of fractional digits sysfs thermal files carry
pub const DEFAULT_PRECISION: u32 = 3;

/// Largest supported precision
pub const MAX_PRECISION: u32 = 18;

/// A decimal equal to `raw / 10^precision`
///
/// `raw` is an `i128`, so readings of up to 38 digits are exact.
#[derive(Debug, Clone, Copy)]
pub struct ScaledValue {
    raw: i128,
    precision: u32,
}

impl ScaledValue {
    /// Build a value, rejecting precisions above [`MAX_PRECISION`]
    pub fn new(raw: i128, precision: u32) -> SensorResult<Self> {
        if precision > MAX_PRECISION {
            return Err(SensorError::configuration(format!(
                "precision {} exceeds maximum of {}",
                precision, MAX_PRECISION
            )));
        }
        Ok(Self { raw, precision })
    }

    /// Unscaled integer as read from the file
    pub fn raw(&self) -> i128 {
        self.raw
    }

    /// Number of fractional digits
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// `10^precision`
    pub fn scale(&self) -> u128 {
        10u128.pow(self.precision)
    }

    /// Whole part, truncated toward zero
    pub fn integer_part(&self) -> i128 {
        self.raw / self.scale() as i128
    }

    /// Fractional digits as an unsigned integer (`35.500` gives `500`)
    pub fn fraction_part(&self) -> u128 {
        self.raw.unsigned_abs() % self.scale()
    }

    /// Lossy conversion for consumers that need a float
    pub fn to_f64(&self) -> f64 {
        self.raw as f64 / self.scale() as f64
    }

    // Drop trailing zeros so equal values share one representation.
    fn normalized(&self) -> (i128, u32) {
        let (mut raw, mut precision) = (self.raw, self.precision);
        while precision > 0 && raw % 10 == 0 {
            raw /= 10;
            precision -= 1;
        }
        (raw, precision)
    }

    // Floor and remainder, the remainder lifted to MAX_PRECISION digits.
    // remainder < 10^18, so lifting stays below 10^36 and cannot overflow.
    fn sort_key(&self) -> (i128, i128) {
        let scale = self.scale() as i128;
        let floor = self.raw.div_euclid(scale);
        let rem = self.raw.rem_euclid(scale) * 10i128.pow(MAX_PRECISION - self.precision);
        (floor, rem)
    }
}

impl PartialEq for ScaledValue {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for ScaledValue {}

impl PartialOrd for ScaledValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaledValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl Hash for ScaledValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw < 0 { "-" } else { "" };
        let magnitude = self.raw.unsigned_abs();
        let scale = self.scale();

        if self.precision == 0 {
            return write!(f, "{}{}", sign, magnitude);
        }

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / scale,
            magnitude % scale,
            width = self.precision as usize
        )
    }
}

impl Serialize for ScaledValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: i128) -> ScaledValue {
        ScaledValue::new(raw, DEFAULT_PRECISION).unwrap()
    }

    #[test]
    fn test_display_keeps_all_fraction_digits() {
        assert_eq!(value(35500).to_string(), "35.500");
        assert_eq!(value(-1000).to_string(), "-1.000");
        assert_eq!(value(0).to_string(), "0.000");
        assert_eq!(value(-5).to_string(), "-0.005");
        assert_eq!(value(42).to_string(), "0.042");
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(value(i64::MIN as i128).to_string(), "-9223372036854775.808");
        assert_eq!(
            value(i128::MIN).to_string(),
            "-170141183460469231731687303715884105.728"
        );
        assert_eq!(ScaledValue::new(7, 0).unwrap().to_string(), "7");
    }

    #[test]
    fn test_parts() {
        let v = value(-12345);
        assert_eq!(v.integer_part(), -12);
        assert_eq!(v.fraction_part(), 345);
        assert_eq!(v.scale(), 1000);
    }

    #[test]
    fn test_equality_across_precisions() {
        let a = value(35500);
        let b = ScaledValue::new(355, 1).unwrap();
        assert_eq!(a, b);
        assert!(value(-1) < value(0));
        assert!(ScaledValue::new(1, 0).unwrap() > value(999));
    }

    #[test]
    fn test_ordering_at_i128_limits() {
        let max = ScaledValue::new(i128::MAX, MAX_PRECISION).unwrap();
        let min = ScaledValue::new(i128::MIN, 0).unwrap();
        let big = ScaledValue::new(i128::MAX, 0).unwrap();

        assert!(min < max);
        assert!(max < big);
        assert_eq!(big, big);
        assert_ne!(max, ScaledValue::new(i128::MAX - 1, MAX_PRECISION).unwrap());
        assert_eq!(
            ScaledValue::new(i128::MAX / 10 * 10, 1).unwrap(),
            ScaledValue::new(i128::MAX / 10, 0).unwrap()
        );
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(value(35500));
        assert!(set.contains(&ScaledValue::new(355, 1).unwrap()));
    }

    #[test]
    fn test_precision_limit() {
        assert!(ScaledValue::new(1, MAX_PRECISION).is_ok());
        let err = ScaledValue::new(1, MAX_PRECISION + 1).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&value(35500)).unwrap();
        assert_eq!(json, "\"35.500\"");
    }
}
