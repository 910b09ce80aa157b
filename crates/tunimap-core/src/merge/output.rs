// crates/tunimap-core/src/merge/output.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};
use crate::location::CanonicalLocation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    pub records: usize,
    pub bytes: usize,
    /// blake3 of the written bytes, first 16 bytes as hex.
    pub digest: String,
}

/// JSON array, two-space indentation, no trailing newline.
pub fn render_locations(locations: &[CanonicalLocation]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(locations)?)
}

/// Write the merged locations, replacing whatever is at `path`.
///
/// Missing parent directories are created. The file is written next to the
/// target and renamed over it, so a failed run leaves the previous file intact.
pub fn write_locations(path: &Path, locations: &[CanonicalLocation]) -> Result<WrittenOutput> {
    let bytes = render_locations(locations)?;
    let output_err = |source: std::io::Error| MergeError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(output_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(output_err)?;
    tmp.write_all(&bytes).map_err(output_err)?;
    tmp.flush().map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;

    Ok(WrittenOutput {
        path: path.to_path_buf(),
        records: locations.len(),
        bytes: bytes.len(),
        digest: content_digest(&bytes),
    })
}

pub fn content_digest(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().as_str()[..32].to_string()
}
