// crates/tunimap-core/src/merge/resolve.rs

use std::path::{Path, PathBuf};

use crate::source::RawSource;

/// First candidate file of `source` that exists under `dir`.
pub fn resolve_source_file(dir: &Path, source: &RawSource) -> Option<PathBuf> {
    source
        .candidates()
        .into_iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}
