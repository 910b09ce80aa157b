// crates/tunimap-core/src/classify/scan.rs
//
// Positional scan for sources without usable column names.
//
// Every scalar value is inspected on its own:
// - numeric and inside the latitude band  -> latitude (later values replace earlier ones)
// - numeric and inside the longitude band -> longitude (same)
// - numeric elsewhere (ids, years)        -> ignored
// - non-numeric text                      -> name candidate; the longest wins,
//                                            ties keep the first seen
//
// A value that parses as a number is never a name candidate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{Axis, Band, Classified, Classify, DropReason};
use crate::normalize::number::parse_decimal;
use crate::record::{scalar_text, RawRecord};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionalScan {
    #[serde(default = "Band::latitude_default")]
    pub latitude_band: Band,
    #[serde(default = "Band::longitude_default")]
    pub longitude_band: Band,
}

impl Default for PositionalScan {
    fn default() -> Self {
        Self {
            latitude_band: Band::TUNISIA_LATITUDE,
            longitude_band: Band::TUNISIA_LONGITUDE,
        }
    }
}

/// Candidates collected from one record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanCandidates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    pub overwrites: usize,
}

impl PositionalScan {
    pub fn new(latitude_band: Band, longitude_band: Band) -> Self {
        Self {
            latitude_band,
            longitude_band,
        }
    }

    pub fn scan(&self, record: &RawRecord<'_>) -> ScanCandidates {
        let mut out = ScanCandidates::default();
        let mut best_len = 0usize;

        for v in record.values() {
            let Some(text) = scalar_text(v) else {
                continue;
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            if let Some(num) = parse_decimal(text) {
                if self.latitude_band.contains(num) {
                    if let Some(prev) = out.latitude.replace(num) {
                        out.overwrites += 1;
                        debug!(axis = %Axis::Latitude, prev, num, "in-band value replaced");
                    }
                } else if self.longitude_band.contains(num) {
                    if let Some(prev) = out.longitude.replace(num) {
                        out.overwrites += 1;
                        debug!(axis = %Axis::Longitude, prev, num, "in-band value replaced");
                    }
                }
                continue;
            }

            let len = text.chars().count();
            if len > best_len {
                best_len = len;
                out.name = Some(text.to_string());
            }
        }

        out
    }
}

impl Classify for PositionalScan {
    fn classify(&self, record: &RawRecord<'_>) -> Result<Classified, DropReason> {
        let c = self.scan(record);
        let latitude = c
            .latitude
            .ok_or(DropReason::MissingCoordinate(Axis::Latitude))?;
        let longitude = c
            .longitude
            .ok_or(DropReason::MissingCoordinate(Axis::Longitude))?;
        let name = c.name.ok_or(DropReason::MissingName)?;

        Ok(Classified {
            name,
            latitude,
            longitude,
            overwrites: c.overwrites,
        })
    }
}
