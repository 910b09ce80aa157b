// crates/tunimap-core/src/merge/driver.rs

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::classify::{Classify, DropReason};
use crate::error::Result;
use crate::location::CanonicalLocation;
use crate::merge::container::{unwrap_items, Container};
use crate::merge::output::{write_locations, WrittenOutput};
use crate::merge::report::{DropTally, SourceOutcome, SourceReport};
use crate::merge::resolve::resolve_source_file;
use crate::normalize::normalize_location;
use crate::record::RawRecord;
use crate::source::config::MergeConfig;
use crate::source::RawSource;
use crate::validate::validate_config;

/// Result of reading every source, before anything is written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeOutcome {
    /// Source order, then record order within each source.
    pub locations: Vec<CanonicalLocation>,
    pub sources: Vec<SourceReport>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub sources: Vec<SourceReport>,
    pub output: WrittenOutput,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.output.records
    }
}

/// Counts from classifying one source's items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStats {
    pub accepted: usize,
    pub dropped: DropTally,
    pub overwrites: usize,
}

/// One full pass: validate, read every source under `dir`, write the output.
///
/// Only configuration errors and output failures are returned as errors.
/// Missing or broken sources are reported in the summary and skipped.
pub fn run(dir: &Path, cfg: &MergeConfig) -> Result<RunSummary> {
    validate_config(cfg)?;

    let outcome = merge_sources(dir, &cfg.sources);
    let path = output_path(dir, &cfg.output);
    let output = write_locations(&path, &outcome.locations)?;

    if output.records == 0 {
        error!(
            path = %output.path.display(),
            sources = outcome.sources.len(),
            "no locations merged; check that sources exist and carry numeric coordinates"
        );
    } else {
        info!(
            records = output.records,
            path = %output.path.display(),
            digest = %output.digest,
            "merge complete"
        );
    }

    Ok(RunSummary {
        sources: outcome.sources,
        output,
    })
}

pub fn output_path(dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        dir.join(output)
    }
}

/// Read and classify every source in order. Never fails as a whole.
pub fn merge_sources(dir: &Path, sources: &[RawSource]) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for source in sources {
        let report = merge_source(dir, source, &mut outcome.locations);
        outcome.sources.push(report);
    }
    outcome
}

/// Merge one source into `out`, returning what happened to it.
pub fn merge_source(
    dir: &Path,
    source: &RawSource,
    out: &mut Vec<CanonicalLocation>,
) -> SourceReport {
    let report = |outcome: SourceOutcome| SourceReport {
        category: source.category.clone(),
        primary: source.primary().to_string(),
        outcome,
    };

    let Some(file) = resolve_source_file(dir, source) else {
        let tried = source.candidates();
        warn!(category = %source.category, tried = ?tried, "source file not found");
        return report(SourceOutcome::Missing { tried });
    };

    let (items, shape) = match load_items(&file) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                category = %source.category,
                file = %file.display(),
                error = %e,
                "source skipped"
            );
            return report(SourceOutcome::Failed {
                file,
                error: e.to_string(),
            });
        }
    };

    let stats = merge_items(&source.strategy, &source.category, &items, out);

    info!(
        category = %source.category,
        file = %file.display(),
        shape = %shape,
        strategy = source.strategy.label(),
        items = items.len(),
        accepted = stats.accepted,
        dropped = %stats.dropped,
        overwrites = stats.overwrites,
        "source merged"
    );

    report(SourceOutcome::Merged {
        file,
        shape,
        items: items.len(),
        accepted: stats.accepted,
        dropped: stats.dropped,
        overwrites: stats.overwrites,
    })
}

/// Read, parse and unwrap one source file.
pub fn load_items(path: &Path) -> Result<(Vec<Value>, Container)> {
    let raw = std::fs::read_to_string(path)?;
    // Spreadsheet exports often start with a BOM.
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let doc: Value = serde_json::from_str(text)?;
    unwrap_items(doc)
}

/// Classify and normalize `items`, appending accepted records to `out`.
pub fn merge_items<C: Classify>(
    classifier: &C,
    category: &str,
    items: &[Value],
    out: &mut Vec<CanonicalLocation>,
) -> ItemStats {
    let mut stats = ItemStats::default();

    for (idx, item) in items.iter().enumerate() {
        let accepted = RawRecord::from_value(item)
            .ok_or(DropReason::NotARecord)
            .and_then(|rec| classifier.classify(&rec))
            .and_then(|c| {
                stats.overwrites += c.overwrites;
                normalize_location(c, category)
            });

        match accepted {
            Ok(loc) => {
                out.push(loc);
                stats.accepted += 1;
            }
            Err(reason) => {
                debug!(category, item = idx, reason = %reason, "record dropped");
                stats.dropped.record(&reason);
            }
        }
    }

    stats
}
