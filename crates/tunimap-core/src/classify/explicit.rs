// crates/tunimap-core/src/classify/explicit.rs

use serde::{Deserialize, Serialize};

use crate::classify::{Axis, Classified, Classify, DropReason};
use crate::normalize::number::parse_decimal;
use crate::normalize::text::clean_name;
use crate::record::{scalar_text, RawRecord};

/// Sources whose column names are known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplicitFields {
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    /// Tried in order when `name` is absent or blank.
    #[serde(default)]
    pub fallback_names: Vec<String>,
}

impl ExplicitFields {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            name: name.into(),
            fallback_names: Vec::new(),
        }
    }

    pub fn with_fallback(mut self, key: impl Into<String>) -> Self {
        self.fallback_names.push(key.into());
        self
    }

    fn coordinate(&self, record: &RawRecord<'_>, key: &str) -> Option<f64> {
        let v = record.get(key)?;
        let text = scalar_text(v)?;
        parse_decimal(&text)
    }

    fn name_of(&self, record: &RawRecord<'_>) -> Option<String> {
        std::iter::once(&self.name)
            .chain(self.fallback_names.iter())
            .filter_map(|key| record.get(key).and_then(scalar_text))
            .find(|s| !clean_name(s).is_empty())
    }
}

impl Classify for ExplicitFields {
    fn classify(&self, record: &RawRecord<'_>) -> Result<Classified, DropReason> {
        let latitude = self
            .coordinate(record, &self.latitude)
            .ok_or(DropReason::MissingCoordinate(Axis::Latitude))?;
        let longitude = self
            .coordinate(record, &self.longitude)
            .ok_or(DropReason::MissingCoordinate(Axis::Longitude))?;
        let name = self.name_of(record).ok_or(DropReason::MissingName)?;

        Ok(Classified {
            name,
            latitude,
            longitude,
            overwrites: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ecole() -> ExplicitFields {
        ExplicitFields::new("Latitude initiale", "Longitude initiale", "nom_etablissement")
            .with_fallback("nom_etablissement_ar")
    }

    #[test]
    fn reads_named_fields_with_decimal_comma() {
        let v = json!({
            "nom_etablissement": "École A",
            "Latitude initiale": "36,8",
            "Longitude initiale": "10,2"
        });
        let c = ecole().classify(&RawRecord::from_value(&v).unwrap()).unwrap();
        assert_eq!(c.name, "École A");
        assert_eq!(c.latitude, 36.8);
        assert_eq!(c.longitude, 10.2);
    }

    #[test]
    fn numeric_fields_are_accepted() {
        let v = json!({
            "nom_etablissement": "B",
            "Latitude initiale": 35.5,
            "Longitude initiale": 9
        });
        let c = ecole().classify(&RawRecord::from_value(&v).unwrap()).unwrap();
        assert_eq!((c.latitude, c.longitude), (35.5, 9.0));
    }

    #[test]
    fn coordinates_with_trailing_text_keep_their_number() {
        let v = json!({
            "nom_etablissement": "C",
            "Latitude initiale": "36,8 N",
            "Longitude initiale": "10.2°"
        });
        let c = ecole().classify(&RawRecord::from_value(&v).unwrap()).unwrap();
        assert_eq!((c.latitude, c.longitude), (36.8, 10.2));
    }

    #[test]
    fn falls_back_to_secondary_name() {
        let v = json!({
            "nom_etablissement": "  ",
            "nom_etablissement_ar": "مدرسة",
            "Latitude initiale": "36",
            "Longitude initiale": "10"
        });
        let c = ecole().classify(&RawRecord::from_value(&v).unwrap()).unwrap();
        assert_eq!(c.name, "مدرسة");
    }

    #[test]
    fn reports_first_missing_piece() {
        let f = ecole();
        let no_lat = json!({"nom_etablissement": "A", "Longitude initiale": "10"});
        let bad_lng = json!({
            "nom_etablissement": "A",
            "Latitude initiale": "36",
            "Longitude initiale": "n/a"
        });
        let no_name = json!({"Latitude initiale": "36", "Longitude initiale": "10"});

        assert_eq!(
            f.classify(&RawRecord::from_value(&no_lat).unwrap()),
            Err(DropReason::MissingCoordinate(Axis::Latitude))
        );
        assert_eq!(
            f.classify(&RawRecord::from_value(&bad_lng).unwrap()),
            Err(DropReason::MissingCoordinate(Axis::Longitude))
        );
        assert_eq!(
            f.classify(&RawRecord::from_value(&no_name).unwrap()),
            Err(DropReason::MissingName)
        );
    }
}
