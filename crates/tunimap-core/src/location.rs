// crates/tunimap-core/src/location.rs

use serde::{Deserialize, Serialize};

/// One normalized point of interest, in the shape the map front-end loads.
///
/// Field order is the serialized key order: `nom`, `categorie`, `lat`, `lng`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalLocation {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}
