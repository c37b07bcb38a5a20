//! Coordinate value type for commute endpoints

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Midpoint between two coordinates, rounded to 6 decimal places.
    ///
    /// The forecast for a commute is fetched once, at the midpoint of the
    /// route, and shared by both legs.
    #[must_use]
    pub fn midpoint(&self, other: Coordinate) -> Coordinate {
        let round6 = |value: f64| (value * 1_000_000.0).round() / 1_000_000.0;
        Coordinate {
            latitude: round6((self.latitude + other.latitude) / 2.0),
            longitude: round6((self.longitude + other.longitude) / 2.0),
        }
    }

    /// Great-circle distance to another coordinate in kilometers
    #[must_use]
    pub fn distance_km(&self, other: Coordinate) -> f64 {
        let from = HaversineLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        };
        let to = HaversineLocation {
            latitude: other.latitude,
            longitude: other.longitude,
        };
        distance(from, to, Units::Kilometers)
    }

    /// Format as a short `lat, lon` string for logs and reports
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
