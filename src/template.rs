// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! Sensor path templates
//!
//! A template is a path with one `{num}` placeholder, filled with the
//! sensor index. `{{` and `}}` stand for literal braces.

use std::fmt;
use std::path::PathBuf;

use crate::error::{SensorError, SensorResult};
use crate::sensor::SensorIndex;

/// Thermal zone temperature, in millidegrees Celsius
pub const THERMAL_ZONE_TEMPLATE: &str = "/sys/class/thermal/thermal_zone{num}/temp";

/// Name of the only placeholder a template may use
pub const PLACEHOLDER: &str = "num";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Index,
}

/// A parsed path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template, rejecting unknown fields and unbalanced braces
    pub fn parse(template: &str) -> SensorResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(SensorError::configuration(format!(
                                    "unclosed placeholder in path template {:?}",
                                    template
                                )));
                            }
                            Some(c) => field.push(c),
                        }
                    }
                    if field != PLACEHOLDER {
                        return Err(SensorError::configuration(format!(
                            "unknown placeholder {{{}}} in path template {:?}, expected {{{}}}",
                            field, template, PLACEHOLDER
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Index);
                }
                '}' => {
                    return Err(SensorError::configuration(format!(
                        "single '}}' in path template {:?}",
                        template
                    )));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Template text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the template contains at least one `{num}`
    pub fn has_placeholder(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Index))
    }

    /// Substitute the index into every placeholder
    pub fn resolve(&self, index: SensorIndex) -> PathBuf {
        let mut path = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Index => path.push_str(&index.to_string()),
            }
        }
        PathBuf::from(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_zone_path() {
        let tpl = PathTemplate::parse(THERMAL_ZONE_TEMPLATE).unwrap();
        assert_eq!(
            tpl.resolve(SensorIndex::from(2)),
            PathBuf::from("/sys/class/thermal/thermal_zone2/temp")
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        let tpl = PathTemplate::parse("/dev/{num}/x{num}").unwrap();
        assert_eq!(tpl.resolve(SensorIndex::from(7)), PathBuf::from("/dev/7/x7"));
    }

    #[test]
    fn test_escaped_braces() {
        let tpl = PathTemplate::parse("/tmp/{{raw}}/{num}").unwrap();
        assert_eq!(tpl.resolve(SensorIndex::from(0)), PathBuf::from("/tmp/{raw}/0"));
    }

    #[test]
    fn test_no_placeholder_resolves_to_itself() {
        let tpl = PathTemplate::parse("/tmp/fixed").unwrap();
        assert!(!tpl.has_placeholder());
        assert_eq!(tpl.resolve(SensorIndex::from(9)), PathBuf::from("/tmp/fixed"));
    }

    #[test]
    fn test_rejects_bad_templates() {
        for bad in ["/tmp/{zone}", "/tmp/{}", "/tmp/{num", "/tmp/num}", "/tmp/{{num}"] {
            let err = PathTemplate::parse(bad).unwrap_err();
            assert!(err.is_configuration(), "{} should be rejected", bad);
        }
    }
}
