// crates/tunimap-core/src/source/mod.rs

pub mod config;
pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::classify::Strategy;

/// One configured input: candidate file names, the category stamped on every
/// record, and how to classify its records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    /// Primary file name first, then aliases, in lookup order.
    pub files: Vec<String>,
    pub category: String,
    /// Append the spelling variants from [`derive_aliases`] after `files`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub derive_variants: bool,
    pub strategy: Strategy,
}

impl RawSource {
    pub fn new(
        primary: impl Into<String>,
        category: impl Into<String>,
        strategy: impl Into<Strategy>,
    ) -> Self {
        Self {
            files: vec![primary.into()],
            category: category.into(),
            derive_variants: false,
            strategy: strategy.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.files.push(alias.into());
        self
    }

    pub fn with_derived_variants(mut self) -> Self {
        self.derive_variants = true;
        self
    }

    pub fn primary(&self) -> &str {
        self.files.first().map(String::as_str).unwrap_or("")
    }

    /// Every file name to try, in order, without duplicates.
    pub fn candidates(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.files.len() * 2);
        for f in &self.files {
            push_unique(&mut out, f.clone());
        }
        if self.derive_variants {
            for f in &self.files {
                for alt in derive_aliases(f) {
                    push_unique(&mut out, alt);
                }
            }
        }
        out
    }
}

fn push_unique(out: &mut Vec<String>, name: String) {
    if !out.contains(&name) {
        out.push(name);
    }
}

/// Spelling variants for a source file name.
///
/// - the first `é` replaced by `e` (`lycées.json` -> `lycees.json`)
/// - a plural `s.json` suffix made singular (`postes.json` -> `poste.json`)
///
/// Variants equal to the input are left out.
pub fn derive_aliases(name: &str) -> Vec<String> {
    let mut out = Vec::new();

    let unaccented = name.replacen('é', "e", 1);
    if unaccented != name {
        out.push(unaccented);
    }

    if let Some(stem) = name.strip_suffix("s.json") {
        let singular = format!("{stem}.json");
        if !out.contains(&singular) {
            out.push(singular);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PositionalScan;

    #[test]
    fn derives_accent_and_plural_variants() {
        assert_eq!(derive_aliases("lycées.json"), vec!["lycees.json", "lycée.json"]);
        assert_eq!(derive_aliases("postes.json"), vec!["poste.json"]);
        assert!(derive_aliases("ecole.json").is_empty());
    }

    #[test]
    fn candidates_keep_declared_order_then_derived() {
        let s = RawSource::new("lycées.json", "Lycée", PositionalScan::default())
            .with_alias("lycees.json")
            .with_derived_variants();
        assert_eq!(
            s.candidates(),
            vec!["lycées.json", "lycees.json", "lycée.json", "lycee.json"]
        );
    }
}
