//! See <https://github.com/matklad/cargo-xtask/>
//!
//! This binary defines auxiliary build commands which are not expressible
//! with just `cargo`.

use clap::Parser;

mod snapshot;

/// Development tasks for the feriados repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for feriados", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Regenerate the bundled holiday snapshot from the live API
    Snapshot(snapshot::SnapshotCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot(cmd) => snapshot::run(cmd).await,
    }
}
