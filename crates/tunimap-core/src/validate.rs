use crate::classify::Strategy;
use crate::error::{MergeError, Result};
use crate::source::config::MergeConfig;
use crate::source::RawSource;

pub fn validate_config(cfg: &MergeConfig) -> Result<()> {
    if cfg.output.as_os_str().is_empty() {
        return Err(MergeError::Validation("output path must not be empty".into()));
    }
    for s in &cfg.sources {
        validate_source(s)?;
    }
    Ok(())
}

pub fn validate_source(s: &RawSource) -> Result<()> {
    if s.category.trim().is_empty() {
        return Err(MergeError::Validation(format!(
            "source {:?}: category must not be empty",
            s.primary()
        )));
    }
    if s.files.is_empty() {
        return Err(MergeError::Validation(format!(
            "source {:?}: at least one file name is required",
            s.category
        )));
    }
    if s.files.iter().any(|f| f.trim().is_empty()) {
        return Err(MergeError::Validation(format!(
            "source {:?}: file names must not be empty",
            s.category
        )));
    }

    match &s.strategy {
        Strategy::ExplicitFields(f) => {
            // Fallbacks may be empty; the three primary keys may not.
            let keys = [
                ("latitude", &f.latitude),
                ("longitude", &f.longitude),
                ("name", &f.name),
            ];
            for (what, key) in keys {
                if key.is_empty() {
                    return Err(MergeError::Validation(format!(
                        "source {:?}: {what} field key must not be empty",
                        s.category
                    )));
                }
            }
        }
        Strategy::PositionalScan(p) => {
            // Overlapping bands would make a value both latitude and longitude.
            if p.latitude_band.overlaps(&p.longitude_band) {
                return Err(MergeError::Validation(format!(
                    "source {:?}: latitude band {} overlaps longitude band {}",
                    s.category, p.latitude_band, p.longitude_band
                )));
            }
        }
    }

    Ok(())
}
