//! `RideForecast` - daily bicycle-commute suckiness reports
//!
//! This library scores how much a bike commute will suck given forecast
//! weather at departure and return times, and carries the thin service layer
//! (forecast fetch, subscription store, email delivery, web API) around the
//! scoring engine.

use std::sync::LazyLock;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

pub mod api;
pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod notifier;
pub mod scoring;
pub mod store;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::{ScoringConfig, ServiceConfig};
pub use error::RideForecastError;
pub use models::{Coordinate, ForecastSeries, Subscription, TemperatureRange, WeatherSnapshot, Wind};
pub use scoring::{ScoreBreakdown, TripReport};
pub use store::SubscriptionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RideForecastError>;

/// Shared HTTP client with transient-error retries for all outbound API calls
pub static API_CLIENT: LazyLock<ClientWithMiddleware> = LazyLock::new(|| {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    ClientBuilder::new(reqwest::Client::new())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
