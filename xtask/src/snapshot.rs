//! Regenerates the static table embedded in feriados_core.
//!
//! Usage: cargo xtask snapshot --from 2024 --to 2026

use std::collections::BTreeMap;
use std::path::PathBuf;

use feriados_core::holiday::Holiday;

/// Snapshot command arguments.
#[derive(Debug, clap::Args)]
pub struct SnapshotCommand {
    /// First year to include.
    #[arg(long, default_value = "2024")]
    pub from: i32,

    /// Last year to include (inclusive).
    #[arg(long, default_value = "2026")]
    pub to: i32,

    /// Output path for the generated snapshot.
    #[arg(long, default_value = "crates/core/data/holidays.json")]
    pub out: PathBuf,

    /// Base URL of the holiday provider.
    #[arg(long, default_value = "https://brasilapi.com.br")]
    pub base_url: String,
}

/// Run the snapshot command.
pub async fn run(cmd: SnapshotCommand) -> anyhow::Result<()> {
    anyhow::ensure!(cmd.from <= cmd.to, "--from must not be after --to");

    let client = reqwest::Client::new();
    let mut years: BTreeMap<i32, Vec<Holiday>> = BTreeMap::new();

    for year in cmd.from..=cmd.to {
        let url = format!("{}/api/feriados/v1/{year}", cmd.base_url);
        let response = client.get(&url).send().await?;
        anyhow::ensure!(
            response.status().is_success(),
            "{url} returned {}",
            response.status()
        );
        let holidays: Vec<Holiday> = response.json().await?;
        println!("Fetched {} holidays for {year}", holidays.len());
        years.insert(year, holidays);
    }

    let json = serde_json::to_string_pretty(&years)?;
    std::fs::write(&cmd.out, json)?;
    println!("Wrote snapshot to {}", cmd.out.display());

    Ok(())
}
