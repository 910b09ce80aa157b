// crates/tunimap-core/src/classify/mod.rs
//
// Field classification: recover (name, latitude, longitude) from one raw record.
// Each source carries its own strategy; the driver only sees `Classify`.

pub mod band;
pub mod explicit;
pub mod scan;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::RawRecord;

pub use band::Band;
pub use explicit::ExplicitFields;
pub use scan::PositionalScan;

/// Best-effort triple recovered from a record, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Classified {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of in-band values that replaced an earlier value on the same axis.
    /// Always 0 for explicit fields.
    pub overwrites: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Why a record was left out of the output. Drops are never errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DropReason {
    #[error("item is not an object or row")]
    NotARecord,

    #[error("no name")]
    MissingName,

    #[error("no {0}")]
    MissingCoordinate(Axis),

    #[error("name is empty after cleaning")]
    EmptyName,

    #[error("{0} is not finite")]
    NonFinite(Axis),

    #[error("{axis} {value} is outside the valid range")]
    OutOfRange { axis: Axis, value: f64 },
}

impl DropReason {
    /// Stable short label, used as a tally key in source reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotARecord => "not_a_record",
            Self::MissingName => "missing_name",
            Self::MissingCoordinate(Axis::Latitude) => "missing_latitude",
            Self::MissingCoordinate(Axis::Longitude) => "missing_longitude",
            Self::EmptyName => "empty_name",
            Self::NonFinite(_) => "non_finite",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}

/// Anything that can turn a raw record into a triple.
pub trait Classify {
    fn classify(&self, record: &RawRecord<'_>) -> Result<Classified, DropReason>;
}

/// Per-source classification strategy.
///
/// In config files the variant is selected by `kind`:
/// `kind = "explicit_fields"` or `kind = "positional_scan"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    ExplicitFields(ExplicitFields),
    PositionalScan(PositionalScan),
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExplicitFields(_) => "explicit_fields",
            Self::PositionalScan(_) => "positional_scan",
        }
    }
}

impl Classify for Strategy {
    fn classify(&self, record: &RawRecord<'_>) -> Result<Classified, DropReason> {
        match self {
            Self::ExplicitFields(s) => s.classify(record),
            Self::PositionalScan(s) => s.classify(record),
        }
    }
}

impl From<ExplicitFields> for Strategy {
    fn from(s: ExplicitFields) -> Self {
        Self::ExplicitFields(s)
    }
}

impl From<PositionalScan> for Strategy {
    fn from(s: PositionalScan) -> Self {
        Self::PositionalScan(s)
    }
}
