//! Trip report builder: one scored leg of a commute

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

use crate::Result;
use crate::config::ScoringConfig;
use crate::error::RideForecastError;
use crate::models::{Coordinate, ForecastSeries, WeatherSnapshot};

use super::geometry::bearing_degrees;
use super::score::ScoreBreakdown;

/// Scored report for a single directional leg
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub scores: ScoreBreakdown,
    /// Direction of travel in degrees north
    pub bearing: f64,
    /// The forecast snapshot the scores were computed from
    pub snapshot: WeatherSnapshot,
}

impl TripReport {
    /// Build the report for one leg of a commute.
    ///
    /// `time_code` is civil time encoded as HHMM (e.g. 1430 for 14:30); it
    /// is combined with `day` in `tz` to find the forecast snapshot closest
    /// to the ride. Both legs of a round trip are built against the same
    /// series, with origin and destination swapped.
    pub fn for_leg<Tz: TimeZone>(
        series: &ForecastSeries,
        day: NaiveDate,
        time_code: u16,
        origin: Coordinate,
        destination: Coordinate,
        tz: &Tz,
        config: &ScoringConfig,
    ) -> Result<TripReport> {
        let bearing = bearing_degrees(origin, destination);

        let (hour, minute) = decode_time_code(time_code)?;
        let naive = day
            .and_hms_opt(hour, minute, 0)
            .ok_or(RideForecastError::InvalidTimeCode { code: time_code })?;
        let instant = tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
            RideForecastError::validation(format!(
                "time {time_code:04} does not exist on {day} in this timezone"
            ))
        })?;

        let snapshot = series.snapshot_at(instant.timestamp())?;
        let scores = ScoreBreakdown::compute(&snapshot, bearing, config);

        Ok(TripReport {
            scores,
            bearing,
            snapshot,
        })
    }
}

/// Split an HHMM time code into hour and minute
pub fn decode_time_code(code: u16) -> Result<(u32, u32)> {
    let hour = u32::from(code / 100);
    let minute = u32::from(code % 100);
    if hour > 23 || minute > 59 {
        return Err(RideForecastError::InvalidTimeCode { code });
    }
    Ok((hour, minute))
}
