//! Minimal end-to-end lookup.
//!
//! Usage: cargo run -p feriados_client --example lookup

use feriados_client::{HolidayService, ServiceConfig, Sweeper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = HolidayService::new(ServiceConfig::from_env());
    let sweeper = Sweeper::start(service.cache().clone());

    for holiday in service.get_holidays(2024).await? {
        println!("{}  {} ({})", holiday.date, holiday.name, holiday.holiday_type);
    }

    println!(
        "Is 2024-01-01 a holiday? {}",
        service.is_holiday("2024-01-01").await?
    );

    sweeper.shutdown().await;
    Ok(())
}
