// crates/tunimap-core/src/source/defaults.rs

use std::path::PathBuf;

use crate::classify::{ExplicitFields, PositionalScan};
use crate::source::RawSource;

pub const DEFAULT_OUTPUT: &str = "src/assets/all_locations.json";

pub fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// The source list the map front-end is built from.
///
/// `ecole.json` has named columns. The other exports come out of a
/// spreadsheet with positional columns ("0", "1", ...) and go through the
/// band scan with Tunisia's bounding box.
pub fn default_sources() -> Vec<RawSource> {
    vec![
        RawSource::new(
            "ecole.json",
            "École",
            ExplicitFields::new("Latitude initiale", "Longitude initiale", "nom_etablissement")
                .with_fallback("nom_etablissement_ar"),
        )
        .with_derived_variants(),
        RawSource::new("lycées.json", "Lycée", PositionalScan::default())
            .with_alias("lycees.json")
            .with_derived_variants(),
        RawSource::new("postes.json", "Poste", PositionalScan::default()).with_derived_variants(),
        RawSource::new("ministere.json", "Ministère", PositionalScan::default())
            .with_alias("ministeres.json")
            .with_derived_variants(),
        RawSource::new("maisonsJeunes.json", "Maison des Jeunes", PositionalScan::default())
            .with_derived_variants(),
    ]
}
