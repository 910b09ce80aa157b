// crates/tunimap-core/src/merge/report.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::classify::DropReason;
use crate::merge::container::Container;

/// Dropped-record counts keyed by [`DropReason::kind`], in key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropTally {
    counts: BTreeMap<&'static str, usize>,
}

impl DropTally {
    pub fn record(&mut self, reason: &DropReason) {
        *self.counts.entry(reason.kind()).or_insert(0) += 1;
    }

    pub fn get(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

impl std::fmt::Display for DropTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (k, v) in &self.counts {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{k}={v}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceOutcome {
    Merged {
        file: PathBuf,
        shape: Container,
        items: usize,
        accepted: usize,
        dropped: DropTally,
        /// Same-axis replacements seen by the positional scan.
        overwrites: usize,
    },
    /// None of the candidate names exist.
    Missing { tried: Vec<String> },
    /// The file exists but could not be read, parsed or unwrapped.
    Failed { file: PathBuf, error: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourceReport {
    pub category: String,
    pub primary: String,
    pub outcome: SourceOutcome,
}

impl SourceReport {
    pub fn accepted(&self) -> usize {
        match &self.outcome {
            SourceOutcome::Merged { accepted, .. } => *accepted,
            _ => 0,
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Merged { .. })
    }
}
