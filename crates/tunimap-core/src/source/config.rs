// crates/tunimap-core/src/source/config.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::source::defaults::{default_output, default_sources};
use crate::source::RawSource;
use crate::validate::validate_config;

/// Everything one merge pass needs: where to write and what to read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Output path, relative to the working directory unless absolute.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    pub sources: Vec<RawSource>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            sources: default_sources(),
        }
    }
}

impl MergeConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: MergeConfig = toml::from_str(s)?;
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn source(&self, category: &str) -> Option<&RawSource> {
        self.sources.iter().find(|s| s.category == category)
    }
}
