// crates/tunimap-cli/src/cmd/inspect.rs

use std::path::PathBuf;

use clap::Args;
use tunimap_core::classify::{Classify, DropReason};
use tunimap_core::merge::driver::load_items;
use tunimap_core::merge::resolve::resolve_source_file;
use tunimap_core::normalize::normalize_location;
use tunimap_core::RawRecord;

use crate::io::config_file;

#[derive(Args)]
pub struct InspectArgs {
    /// Category of the source to inspect (e.g. "Poste")
    #[arg(long)]
    pub category: String,

    /// Directory holding the source JSON files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// TOML source configuration. If omitted, uses the built-in source list.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print at most N records (0 = all)
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let cfg = config_file::load_or_default(args.config.as_deref())?;
    let Some(source) = cfg.source(&args.category) else {
        let known: Vec<&str> = cfg.sources.iter().map(|s| s.category.as_str()).collect();
        anyhow::bail!("unknown category {:?} (known: {})", args.category, known.join(", "));
    };

    let Some(file) = resolve_source_file(&args.dir, source) else {
        anyhow::bail!(
            "no file for {:?} under {} (tried {})",
            source.category,
            args.dir.display(),
            source.candidates().join(", ")
        );
    };

    let (items, shape) = load_items(&file)?;

    println!("source   = {}", file.display());
    println!("category = {}", source.category);
    println!("strategy = {}", source.strategy.label());
    println!("shape    = {}", shape);
    println!("items    = {}", items.len());
    println!();

    let shown = if args.limit == 0 { items.len() } else { args.limit.min(items.len()) };
    let mut accepted = 0usize;
    for (i, item) in items.iter().enumerate() {
        let decision = RawRecord::from_value(item)
            .ok_or(DropReason::NotARecord)
            .and_then(|rec| source.strategy.classify(&rec))
            .and_then(|c| normalize_location(c, &source.category));

        if decision.is_ok() {
            accepted += 1;
        }
        if i >= shown {
            continue;
        }
        match decision {
            Ok(loc) => println!("#{:<5} ok   {}", i, serde_json::to_string(&loc)?),
            Err(reason) => println!("#{:<5} drop {}", i, reason),
        }
    }

    println!();
    println!("accepted = {}/{}", accepted, items.len());
    Ok(())
}
