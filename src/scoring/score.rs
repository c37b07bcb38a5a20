//! Suckiness sub-scores for temperature, wind, rain, and clouds

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::models::{TemperatureRange, WeatherSnapshot, Wind};

use super::geometry::angular_difference;
use super::round2;

/// The four component scores for one leg; higher is worse
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub temperature: f64,
    pub wind: f64,
    pub rain: f64,
    pub clouds: f64,
}

impl ScoreBreakdown {
    /// Score a weather snapshot against a travel bearing
    #[must_use]
    pub fn compute(snapshot: &WeatherSnapshot, travel_bearing: f64, config: &ScoringConfig) -> Self {
        Self {
            temperature: temperature_score(snapshot.temp, snapshot.humidity, config),
            wind: wind_score(snapshot.wind, travel_bearing),
            rain: rain_score(snapshot.rain),
            clouds: clouds_score(snapshot.clouds),
        }
    }

    /// Sum of the four component scores
    #[must_use]
    pub fn total(&self) -> f64 {
        self.temperature + self.wind + self.rain + self.clouds
    }
}

/// Temperature suckiness: distance from the ideal band, averaged over the
/// forecast min and max.
///
/// Cold deviation is linear. Heat deviation is amplified by humidity, cold
/// never is. Dividing by 2.5 rescales the result into the same point range
/// as the other factors.
#[must_use]
pub fn temperature_score(temp: TemperatureRange, humidity: f64, config: &ScoringConfig) -> f64 {
    let deviation = |t: f64| {
        if t < config.ideal_temp_min_c {
            config.ideal_temp_min_c - t
        } else if t > config.ideal_temp_max_c {
            (t - config.ideal_temp_max_c) * humidity_multiplier(humidity)
        } else {
            0.0
        }
    };
    let average = (deviation(temp.min) + deviation(temp.max)) / 2.0;
    round2(average / 2.5)
}

fn humidity_multiplier(humidity: f64) -> f64 {
    1.0 + humidity / 100.0
}

/// Wind suckiness.
///
/// Tailwind is great and all, but if it's too windy it's still gonna suck,
/// so the direction multiplier only applies to 70% of the base score:
/// a pure tailwind multiplies by -1, a serious crosswind by 2, a pure
/// headwind by 5.
#[must_use]
pub fn wind_score(wind: Wind, travel_bearing: f64) -> f64 {
    let base_score = wind.speed / 20.0;
    let multiplier = wind_direction_multiplier(travel_bearing, wind.deg);
    let modifiable_score = base_score * 0.7;
    let static_score = base_score * 0.3;
    round2(modifiable_score * multiplier + static_score)
}

fn wind_direction_multiplier(travel_deg: f64, wind_deg: f64) -> f64 {
    angular_difference(travel_deg, wind_deg) / 30.0 - 1.0
}

/// Rain suckiness: any rain at all carries a fixed 5-point penalty plus the
/// 3-hour accumulation.
#[must_use]
pub fn rain_score(rain_mm: f64) -> f64 {
    if rain_mm == 0.0 {
        0.0
    } else {
        round2(5.0 + rain_mm)
    }
}

/// Cloud suckiness: linear in cover, maximum 5 points
#[must_use]
pub fn clouds_score(clouds_pct: f64) -> f64 {
    round2(clouds_pct / 100.0 * 5.0)
}
