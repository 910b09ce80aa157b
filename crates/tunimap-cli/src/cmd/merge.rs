// crates/tunimap-cli/src/cmd/merge.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tunimap_core::merge::report::{SourceOutcome, SourceReport};

use crate::io::config_file;

#[derive(Args)]
pub struct MergeArgs {
    /// Directory holding the source JSON files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Output path (overrides the config). Relative paths are taken under --dir.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// TOML source configuration. If omitted, uses the built-in source list.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> anyhow::Result<()> {
    let mut cfg = config_file::load_or_default(args.config.as_deref())?;
    if let Some(out) = args.out {
        cfg.output = out;
    }

    let summary = tunimap_core::run(&args.dir, &cfg)
        .with_context(|| format!("merge sources under {}", args.dir.display()))?;

    eprintln!("--- merge ---");
    for s in &summary.sources {
        eprintln!("{}", source_line(s));
    }
    eprintln!("total           = {}", summary.total());
    eprintln!("output          = {}", summary.output.path.display());
    eprintln!("bytes           = {}", summary.output.bytes);
    eprintln!("digest          = {}", summary.output.digest);
    if summary.total() == 0 {
        eprintln!(
            "WARN: zero locations written. \
             Check that source files exist and carry numeric coordinates."
        );
    }

    Ok(())
}

fn source_line(s: &SourceReport) -> String {
    match &s.outcome {
        SourceOutcome::Merged {
            file,
            accepted,
            dropped,
            ..
        } => format!(
            "ok      {:<20} {:>6} from {} (dropped: {})",
            s.category,
            accepted,
            file.display(),
            dropped
        ),
        SourceOutcome::Missing { tried } => {
            format!("missing {:<20} tried {}", s.category, tried.join(", "))
        }
        SourceOutcome::Failed { file, error } => {
            format!("error   {:<20} {}: {}", s.category, file.display(), error)
        }
    }
}
