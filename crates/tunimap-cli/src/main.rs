// crates/tunimap-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "tunimap-cli")]
#[command(
    about = "Merge point-of-interest exports into the map's location list",
    long_about = None
)]
pub struct Cli {
    /// Debug logging (per-record drop reasons). RUST_LOG overrides.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge every configured source into one JSON array
    Merge(cmd::merge::MergeArgs),

    /// Show per-record classification for one source without writing output
    Inspect(cmd::inspect::InspectArgs),

    /// Print the effective source configuration as TOML
    Sources(cmd::sources::SourcesArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Merge(args) => cmd::merge::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Sources(args) => cmd::sources::run(args),
    }
}
