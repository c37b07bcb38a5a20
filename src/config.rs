//! Configuration for the `RideForecast` service
//!
//! Service settings come from environment variables with sensible defaults;
//! scoring constants are carried in a typed struct so the formulas never
//! reach for hidden globals.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;

use crate::error::RideForecastError;

/// Boundaries of the ideal riding temperature band, in degrees Celsius.
///
/// Temperatures inside the band score zero; deviation below it is penalized
/// linearly, deviation above it is amplified by humidity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub ideal_temp_min_c: f64,
    pub ideal_temp_max_c: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ideal_temp_min_c: 13.0,
            ideal_temp_max_c: 25.0,
        }
    }
}

impl ScoringConfig {
    /// Build a scoring configuration with a custom temperature band
    pub fn new(ideal_temp_min_c: f64, ideal_temp_max_c: f64) -> crate::Result<Self> {
        if ideal_temp_min_c > ideal_temp_max_c {
            return Err(RideForecastError::config(format!(
                "ideal temperature band is inverted: {ideal_temp_min_c} > {ideal_temp_max_c}"
            )));
        }
        Ok(Self {
            ideal_temp_min_c,
            ideal_temp_max_c,
        })
    }
}

/// Runtime settings for the server and the notification loop
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port the web server listens on
    pub port: u16,
    /// Timezone used to resolve subscriber departure/return times
    pub timezone: Tz,
    /// Path of the JSON subscription store
    pub store_path: PathBuf,
    /// Hours between notification runs
    pub report_interval_hours: u64,
    /// Scoring constants handed to the trip report builder
    pub scoring: ScoringConfig,
}

impl ServiceConfig {
    /// Assemble the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => 8888,
        };

        let timezone: Tz = env::var("REPORT_TIMEZONE")
            .unwrap_or_else(|_| "Europe/Amsterdam".to_string())
            .parse()
            .map_err(|err| anyhow!("Invalid REPORT_TIMEZONE: {err}"))?;

        let store_path =
            PathBuf::from(env::var("STORE_PATH").unwrap_or_else(|_| "store.json".to_string()));

        let report_interval_hours = match env::var("REPORT_INTERVAL_HOURS") {
            Ok(raw) => raw
                .parse()
                .context("REPORT_INTERVAL_HOURS must be a number")?,
            Err(_) => 24,
        };

        let defaults = ScoringConfig::default();
        let ideal_temp_min_c = match env::var("IDEAL_TEMP_MIN") {
            Ok(raw) => raw.parse().context("IDEAL_TEMP_MIN must be a number")?,
            Err(_) => defaults.ideal_temp_min_c,
        };
        let ideal_temp_max_c = match env::var("IDEAL_TEMP_MAX") {
            Ok(raw) => raw.parse().context("IDEAL_TEMP_MAX must be a number")?,
            Err(_) => defaults.ideal_temp_max_c,
        };
        let scoring = ScoringConfig::new(ideal_temp_min_c, ideal_temp_max_c)?;

        Ok(Self {
            port,
            timezone,
            store_path,
            report_interval_hours,
            scoring,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.ideal_temp_min_c, 13.0);
        assert_eq!(scoring.ideal_temp_max_c, 25.0);
    }

    #[test]
    fn test_custom_band() {
        let scoring = ScoringConfig::new(10.0, 20.0).unwrap();
        assert_eq!(scoring.ideal_temp_min_c, 10.0);
        assert_eq!(scoring.ideal_temp_max_c, 20.0);
    }

    #[test]
    fn test_inverted_band_is_rejected() {
        let err = ScoringConfig::new(20.0, 10.0).unwrap_err();
        assert!(matches!(err, RideForecastError::Config { .. }));
    }
}
