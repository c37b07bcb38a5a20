use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rideforecast::{config::ServiceConfig, notifier, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        "Starting rideforecast v{} (timezone {}, reports every {}h)",
        rideforecast::VERSION,
        config.timezone,
        config.report_interval_hours
    );

    tokio::spawn(notifier::run_schedule(config.clone()));

    web::run(config.port).await
}
