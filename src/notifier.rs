//! Notification loop: score every subscriber's commute and send the report
//!
//! One forecast fetch per subscriber (at the route midpoint), two legs
//! against the same series. A failing subscriber is logged and skipped; the
//! run continues with the rest.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;

use crate::config::ServiceConfig;
use crate::email;
use crate::models::Subscription;
use crate::scoring::TripReport;
use crate::store::SubscriptionStore;
use crate::weather;

/// Run the notification loop forever, once per configured interval
pub async fn run_schedule(config: ServiceConfig) {
    let period = Duration::from_secs(config.report_interval_hours * 3600);
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        if let Err(err) = send_all_reports(&config).await {
            tracing::error!("Notification run failed: {err:#}");
        }
    }
}

/// One notification run over every stored subscription
pub async fn send_all_reports(config: &ServiceConfig) -> Result<()> {
    let store = SubscriptionStore::new(config.store_path.clone());
    let subscriptions = store.load()?;
    tracing::info!("Sending reports to {} subscribers", subscriptions.len());

    let runs = subscriptions.iter().map(|subscription| async move {
        if let Err(err) = send_report_for(config, subscription).await {
            tracing::error!(
                subscriber = %subscription.email,
                "Skipping subscriber: {err:#}"
            );
        }
    });
    futures::future::join_all(runs).await;

    Ok(())
}

async fn send_report_for(config: &ServiceConfig, subscription: &Subscription) -> Result<()> {
    let midpoint = subscription.home.midpoint(subscription.destination);
    let series = weather::get_forecast(midpoint).await?;

    let today = Utc::now().with_timezone(&config.timezone).date_naive();
    let departure = TripReport::for_leg(
        &series,
        today,
        subscription.departure_time,
        subscription.home,
        subscription.destination,
        &config.timezone,
        &config.scoring,
    )?;
    let ret = TripReport::for_leg(
        &series,
        today,
        subscription.return_time,
        subscription.destination,
        subscription.home,
        &config.timezone,
        &config.scoring,
    )?;

    email::send_report(subscription, &departure, &ret).await?;
    Ok(())
}
