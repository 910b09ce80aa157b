// crates/tunimap-cli/src/cmd/sources.rs

use std::path::PathBuf;

use clap::Args;

use crate::io::config_file;

#[derive(Args)]
pub struct SourcesArgs {
    /// TOML source configuration. If omitted, prints the built-in source list.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: SourcesArgs) -> anyhow::Result<()> {
    let cfg = config_file::load_or_default(args.config.as_deref())?;
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
