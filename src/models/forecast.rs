//! Raw forecast series as delivered by the weather provider
//!
//! The structures here mirror the OpenWeatherMap 5-day/3-hour forecast
//! entries. Optional sub-records stay optional; normalization into a typed
//! [`WeatherSnapshot`](crate::models::WeatherSnapshot) happens at selection
//! time.

use serde::Deserialize;

use crate::Result;
use crate::error::RideForecastError;
use crate::models::weather::WeatherSnapshot;

/// One raw forecast entry
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Forecast timestamp, epoch seconds
    pub dt: i64,
    /// Temperature and humidity block; required for scoring
    pub main: Option<MainConditions>,
    /// Wind block, absent when the provider reports no wind
    pub wind: Option<WindConditions>,
    /// Rain block, absent when no precipitation is forecast
    pub rain: Option<Precipitation>,
    /// Cloud cover block
    pub clouds: Option<CloudCover>,
}

/// Temperature and humidity sub-record
#[derive(Debug, Clone, Deserialize)]
pub struct MainConditions {
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
}

/// Wind sub-record
#[derive(Debug, Clone, Deserialize)]
pub struct WindConditions {
    /// Wind speed in km/h
    pub speed: f64,
    /// Meteorological degrees north (0 = wind from the north)
    pub deg: f64,
}

/// Precipitation sub-record
#[derive(Debug, Clone, Deserialize)]
pub struct Precipitation {
    /// Accumulation over the last 3 hours in mm
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

/// Cloud cover sub-record
#[derive(Debug, Clone, Deserialize)]
pub struct CloudCover {
    /// Cloudiness percentage (0-100)
    pub all: Option<f64>,
}

/// An ordered sequence of forecast entries for one location
#[derive(Debug, Clone, Default)]
pub struct ForecastSeries {
    entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    #[must_use]
    pub fn new(entries: Vec<ForecastEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry closest in time to `target` (epoch seconds).
    ///
    /// Linear scan; does not assume the series is sorted. Ties keep the
    /// first-encountered entry.
    pub fn closest_entry(&self, target: i64) -> Result<&ForecastEntry> {
        let mut closest: Option<(&ForecastEntry, i64)> = None;
        for entry in &self.entries {
            let delta = (entry.dt - target).abs();
            match closest {
                Some((_, best)) if delta >= best => {}
                _ => closest = Some((entry, delta)),
            }
        }
        closest
            .map(|(entry, _)| entry)
            .ok_or(RideForecastError::EmptySeries)
    }

    /// Select and normalize the snapshot closest in time to `target`
    pub fn snapshot_at(&self, target: i64) -> Result<WeatherSnapshot> {
        WeatherSnapshot::from_entry(self.closest_entry(target)?)
    }
}

impl From<Vec<ForecastEntry>> for ForecastSeries {
    fn from(entries: Vec<ForecastEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series_from_json(value: serde_json::Value) -> ForecastSeries {
        let entries: Vec<ForecastEntry> = serde_json::from_value(value).unwrap();
        ForecastSeries::new(entries)
    }

    fn two_entry_series() -> ForecastSeries {
        series_from_json(json!([
            {
                "dt": 1550296800,
                "main": {"temp_min": 4.0, "temp_max": 6.0, "humidity": 80.0},
                "wind": {"speed": 15.0, "deg": 180.0},
                "clouds": {"all": 75.0}
            },
            {
                "dt": 1550329200,
                "main": {"temp_min": 7.0, "temp_max": 9.0, "humidity": 70.0},
                "rain": {"3h": 1.2}
            }
        ]))
    }

    #[test]
    fn test_closest_entry_exact_match() {
        let series = two_entry_series();
        assert_eq!(series.closest_entry(1550296800).unwrap().dt, 1550296800);
    }

    #[test]
    fn test_closest_entry_just_before() {
        // 200s from the later entry, 32400s from the earlier one
        let series = two_entry_series();
        assert_eq!(series.closest_entry(1550329000).unwrap().dt, 1550329200);
    }

    #[test]
    fn test_closest_entry_just_after() {
        let series = two_entry_series();
        assert_eq!(series.closest_entry(1550330000).unwrap().dt, 1550329200);
    }

    #[test]
    fn test_closest_entry_tie_keeps_first() {
        let series = series_from_json(json!([
            {"dt": 1000, "main": {"temp_min": 1.0, "temp_max": 1.0, "humidity": 50.0}},
            {"dt": 2000, "main": {"temp_min": 2.0, "temp_max": 2.0, "humidity": 50.0}}
        ]));
        // 1500 is equidistant from both entries
        assert_eq!(series.closest_entry(1500).unwrap().dt, 1000);
    }

    #[test]
    fn test_closest_entry_ignores_sort_order() {
        let series = series_from_json(json!([
            {"dt": 9000, "main": {"temp_min": 1.0, "temp_max": 1.0, "humidity": 50.0}},
            {"dt": 1000, "main": {"temp_min": 2.0, "temp_max": 2.0, "humidity": 50.0}},
            {"dt": 5000, "main": {"temp_min": 3.0, "temp_max": 3.0, "humidity": 50.0}}
        ]));
        assert_eq!(series.closest_entry(1200).unwrap().dt, 1000);
    }

    #[test]
    fn test_empty_series_error() {
        let series = ForecastSeries::default();
        let err = series.closest_entry(0).unwrap_err();
        assert!(matches!(err, RideForecastError::EmptySeries));
    }

    #[test]
    fn test_snapshot_at_normalizes_entry() {
        let series = two_entry_series();
        let snapshot = series.snapshot_at(1550296800).unwrap();
        assert_eq!(snapshot.dt, 1550296800);
        assert_eq!(snapshot.wind.speed, 15.0);
        assert_eq!(snapshot.rain, 0.0);
        assert_eq!(snapshot.clouds, 75.0);
    }
}
