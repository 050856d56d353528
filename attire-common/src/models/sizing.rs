// File: attire-common/src/models/sizing.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Chart axis alongside region. The charts carry separate bands for women's
/// and men's cuts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Women,
    Men,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Women => write!(f, "women"),
            Gender::Men => write!(f, "men"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "women" | "w" | "female" => Ok(Gender::Women),
            "men" | "m" | "male" => Ok(Gender::Men),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Inclusive body-measurement range in inches.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct MeasurementRange {
    pub low: f64,
    pub high: f64,
}

impl MeasurementRange {
    /// Parses the `"low-high"` notation the charts are written in,
    /// e.g. `"34-35"` or `"17-17.5"`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let (low_s, high_s) = s
            .split_once('-')
            .ok_or_else(|| Error::Parse(format!("Bad measurement range: '{}'", s)))?;
        let low: f64 = low_s
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("Bad range bound: '{}'", low_s)))?;
        let high: f64 = high_s
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("Bad range bound: '{}'", high_s)))?;
        if high < low {
            return Err(Error::InvalidInput(format!(
                "Range '{}' ends before it starts",
                s
            )));
        }
        Ok(Self { low, high })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Whether the two ranges share more than a single boundary point.
    /// Adjacent bands like 34-36 and 36-38 do not count as overlapping; at
    /// the shared bound the band listed first wins.
    pub fn overlaps(&self, other: &MeasurementRange) -> bool {
        self.low < other.high && other.low < self.high
    }
}

impl fmt::Display for MeasurementRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// One row of a size chart: a US label, the region-native label, and the
/// inclusive measurement ranges that map onto it. Women's charts carry hips,
/// men's carry shoulder width; both live in `hips_or_shoulder`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SizeBand {
    pub us: String,
    pub native: String,
    pub chest: MeasurementRange,
    pub waist: MeasurementRange,
    pub hips_or_shoulder: MeasurementRange,
}

/// What the size-converter form collects. Only `chest` feeds the
/// recommendation today; the remaining fields are gathered for future use
/// and deliberately ignored by the lookup.
#[derive(Debug, Default, Clone)]
pub struct Measurements {
    pub chest: String,
    pub waist: String,
    pub hips: String,
    pub inseam: String,
    pub shoulder: String,
}
