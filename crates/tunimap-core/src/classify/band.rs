// crates/tunimap-core/src/classify/band.rs

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};

/// Open numeric interval `(min, max)`.
///
/// Written in config files as a two-element array: `latitude_band = [30.0, 38.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Band {
    min: f64,
    max: f64,
}

impl Band {
    /// Latitudes of mainland Tunisia and its islands, with margin.
    pub const TUNISIA_LATITUDE: Band = Band { min: 30.0, max: 38.0 };
    /// Longitudes of Tunisia, widened to 13 on the east side.
    pub const TUNISIA_LONGITUDE: Band = Band { min: 7.0, max: 13.0 };

    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MergeError::Validation(format!(
                "band bounds must be finite (got {min}, {max})"
            )));
        }
        if min >= max {
            return Err(MergeError::Validation(format!(
                "band min must be < max (got {min}, {max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Strict on both ends.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v > self.min && v < self.max
    }

    /// True if some value lies strictly inside both bands.
    pub fn overlaps(&self, other: &Band) -> bool {
        self.min < other.max && other.min < self.max
    }

    pub fn latitude_default() -> Band {
        Self::TUNISIA_LATITUDE
    }

    pub fn longitude_default() -> Band {
        Self::TUNISIA_LONGITUDE
    }
}

impl TryFrom<[f64; 2]> for Band {
    type Error = MergeError;

    fn try_from(v: [f64; 2]) -> Result<Self> {
        Band::new(v[0], v[1])
    }
}

impl From<Band> for [f64; 2] {
    fn from(b: Band) -> Self {
        [b.min, b.max]
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}
