//! Normalized weather snapshot used by the scoring engine

use serde::Serialize;

use crate::Result;
use crate::error::RideForecastError;
use crate::models::forecast::ForecastEntry;

/// Wind at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Wind {
    /// Speed in km/h
    pub speed: f64,
    /// Meteorological degrees north (0 = wind blowing from the north)
    pub deg: f64,
}

/// Forecast temperature range in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// One normalized weather observation selected from a forecast series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    /// Cloud cover percentage (0-100)
    pub clouds: f64,
    /// Forecast timestamp, epoch seconds
    pub dt: i64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Rain accumulation in mm over 3 hours
    pub rain: f64,
    pub temp: TemperatureRange,
    pub wind: Wind,
}

impl WeatherSnapshot {
    /// Normalize one raw forecast entry.
    ///
    /// Wind, rain, and cloud sub-records default to zero when absent.
    /// Temperature and humidity are required; a missing field surfaces as
    /// [`RideForecastError::MalformedEntry`].
    pub fn from_entry(entry: &ForecastEntry) -> Result<Self> {
        let missing = |field: &'static str| RideForecastError::MalformedEntry {
            timestamp: entry.dt,
            field,
        };

        let main = entry.main.as_ref().ok_or_else(|| missing("main"))?;
        let temp = TemperatureRange {
            min: main.temp_min.ok_or_else(|| missing("main.temp_min"))?,
            max: main.temp_max.ok_or_else(|| missing("main.temp_max"))?,
        };
        let humidity = main.humidity.ok_or_else(|| missing("main.humidity"))?;

        let wind = entry
            .wind
            .as_ref()
            .map(|w| Wind {
                speed: w.speed,
                deg: w.deg,
            })
            .unwrap_or_default();

        let rain = entry
            .rain
            .as_ref()
            .and_then(|r| r.three_hour)
            .unwrap_or(0.0);

        let clouds = entry.clouds.as_ref().and_then(|c| c.all).unwrap_or(0.0);

        Ok(Self {
            clouds,
            dt: entry.dt,
            humidity,
            rain,
            temp,
            wind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_from_json(value: serde_json::Value) -> ForecastEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_entry() {
        let entry = entry_from_json(json!({
            "dt": 1550296800,
            "main": {"temp_min": 4.0, "temp_max": 6.0, "humidity": 80.0},
            "wind": {"speed": 15.0, "deg": 180.0},
            "rain": {"3h": 0.4},
            "clouds": {"all": 75.0}
        }));
        let snapshot = WeatherSnapshot::from_entry(&entry).unwrap();
        assert_eq!(snapshot.dt, 1550296800);
        assert_eq!(snapshot.temp, TemperatureRange { min: 4.0, max: 6.0 });
        assert_eq!(snapshot.humidity, 80.0);
        assert_eq!(
            snapshot.wind,
            Wind {
                speed: 15.0,
                deg: 180.0
            }
        );
        assert_eq!(snapshot.rain, 0.4);
        assert_eq!(snapshot.clouds, 75.0);
    }

    #[test]
    fn test_optional_blocks_default_to_zero() {
        let entry = entry_from_json(json!({
            "dt": 1550296800,
            "main": {"temp_min": 14.0, "temp_max": 18.0, "humidity": 55.0}
        }));
        let snapshot = WeatherSnapshot::from_entry(&entry).unwrap();
        assert_eq!(snapshot.wind, Wind::default());
        assert_eq!(snapshot.rain, 0.0);
        assert_eq!(snapshot.clouds, 0.0);
    }

    #[test]
    fn test_rain_block_without_accumulation_defaults_to_zero() {
        let entry = entry_from_json(json!({
            "dt": 1550296800,
            "main": {"temp_min": 14.0, "temp_max": 18.0, "humidity": 55.0},
            "rain": {}
        }));
        let snapshot = WeatherSnapshot::from_entry(&entry).unwrap();
        assert_eq!(snapshot.rain, 0.0);
    }

    #[test]
    fn test_missing_main_block_is_malformed() {
        let entry = entry_from_json(json!({"dt": 1550296800}));
        let err = WeatherSnapshot::from_entry(&entry).unwrap_err();
        assert!(matches!(
            err,
            RideForecastError::MalformedEntry { field: "main", .. }
        ));
    }

    #[test]
    fn test_missing_humidity_is_malformed() {
        let entry = entry_from_json(json!({
            "dt": 1550296800,
            "main": {"temp_min": 14.0, "temp_max": 18.0}
        }));
        let err = WeatherSnapshot::from_entry(&entry).unwrap_err();
        assert!(matches!(
            err,
            RideForecastError::MalformedEntry {
                field: "main.humidity",
                ..
            }
        ));
    }
}
