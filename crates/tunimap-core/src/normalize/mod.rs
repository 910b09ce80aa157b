// crates/tunimap-core/src/normalize/mod.rs

pub mod number;
pub mod text;

use crate::classify::{Axis, Classified, DropReason};
use crate::location::CanonicalLocation;

pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Turn a classified triple into an output record, or say why it is dropped.
///
/// Names are cleaned (line breaks to spaces, trimmed). Coordinates must be
/// finite and inside -90..=90 / -180..=180.
pub fn normalize_location(c: Classified, category: &str) -> Result<CanonicalLocation, DropReason> {
    let latitude = check_axis(c.latitude, Axis::Latitude, LATITUDE_LIMIT)?;
    let longitude = check_axis(c.longitude, Axis::Longitude, LONGITUDE_LIMIT)?;

    let name = text::clean_name(&c.name);
    if name.is_empty() {
        return Err(DropReason::EmptyName);
    }

    Ok(CanonicalLocation {
        name,
        category: category.to_string(),
        latitude,
        longitude,
    })
}

fn check_axis(value: f64, axis: Axis, limit: f64) -> Result<f64, DropReason> {
    if !value.is_finite() {
        return Err(DropReason::NonFinite(axis));
    }
    if value < -limit || value > limit {
        return Err(DropReason::OutOfRange { axis, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(name: &str, latitude: f64, longitude: f64) -> Classified {
        Classified {
            name: name.to_string(),
            latitude,
            longitude,
            overwrites: 0,
        }
    }

    #[test]
    fn builds_canonical_record() {
        let loc = normalize_location(triple(" Poste\r\nCentral ", 36.5, 10.3), "Poste").unwrap();
        assert_eq!(
            loc,
            CanonicalLocation {
                name: "Poste Central".into(),
                category: "Poste".into(),
                latitude: 36.5,
                longitude: 10.3,
            }
        );
    }

    #[test]
    fn rejects_bad_numbers_and_empty_names() {
        assert_eq!(
            normalize_location(triple("A", f64::NAN, 10.0), "x"),
            Err(DropReason::NonFinite(Axis::Latitude))
        );
        assert_eq!(
            normalize_location(triple("A", 36.0, f64::INFINITY), "x"),
            Err(DropReason::NonFinite(Axis::Longitude))
        );
        assert_eq!(
            normalize_location(triple("A", 123.0, 10.0), "x"),
            Err(DropReason::OutOfRange { axis: Axis::Latitude, value: 123.0 })
        );
        assert_eq!(
            normalize_location(triple(" \n ", 36.0, 10.0), "x"),
            Err(DropReason::EmptyName)
        );
    }
}
