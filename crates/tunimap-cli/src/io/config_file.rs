// crates/tunimap-cli/src/io/config_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tunimap_core::MergeConfig;

/// Load and validate a TOML source configuration.
pub fn load_config(path: &Path) -> Result<MergeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg = MergeConfig::from_toml_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), sources = cfg.sources.len(), "loaded source config");
    Ok(cfg)
}

/// `--config` if given, otherwise the built-in source list.
pub fn load_or_default(path: Option<&Path>) -> Result<MergeConfig> {
    match path {
        Some(p) => load_config(p),
        None => Ok(MergeConfig::default()),
    }
}
