//! Subscriber records for the daily report

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::RideForecastError;
use crate::models::location::Coordinate;
use crate::scoring::report::decode_time_code;

/// One subscriber: who to mail, where they ride, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub email: String,
    pub home: Coordinate,
    pub destination: Coordinate,
    /// Departure time as HHMM, e.g. 830 for 08:30
    pub departure_time: u16,
    /// Return time as HHMM, e.g. 1745 for 17:45
    pub return_time: u16,
}

impl Subscription {
    /// Validate a subscription before it enters the store.
    ///
    /// Rejects invalid time codes, coordinates outside the valid range, and
    /// identical home/destination points (the bearing is undefined for a
    /// zero-length route).
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RideForecastError::validation("name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(RideForecastError::validation(format!(
                "`{}` is not an email address",
                self.email
            )));
        }

        decode_time_code(self.departure_time)?;
        decode_time_code(self.return_time)?;

        for (label, coordinate) in [("home", self.home), ("destination", self.destination)] {
            if !(-90.0..=90.0).contains(&coordinate.latitude)
                || !(-180.0..=180.0).contains(&coordinate.longitude)
            {
                return Err(RideForecastError::validation(format!(
                    "{label} coordinates out of range: {}",
                    coordinate.format_coordinates()
                )));
            }
        }

        if self.home == self.destination {
            return Err(RideForecastError::validation(
                "home and destination must differ",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription() -> Subscription {
        Subscription {
            name: "dan".to_string(),
            email: "dan@dan.dan".to_string(),
            home: Coordinate::new(52.344, 4.9504),
            destination: Coordinate::new(52.0902, 5.1214),
            departure_time: 900,
            return_time: 1800,
        }
    }

    #[test]
    fn test_valid_subscription() {
        assert!(subscription().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_time_code() {
        let mut sub = subscription();
        sub.departure_time = 2460;
        assert!(matches!(
            sub.validate().unwrap_err(),
            RideForecastError::InvalidTimeCode { code: 2460 }
        ));

        let mut sub = subscription();
        sub.return_time = 1075;
        assert!(sub.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let mut sub = subscription();
        sub.home = Coordinate::new(91.0, 4.9);
        assert!(matches!(
            sub.validate().unwrap_err(),
            RideForecastError::Validation { .. }
        ));
    }

    #[test]
    fn test_rejects_identical_endpoints() {
        let mut sub = subscription();
        sub.destination = sub.home;
        assert!(matches!(
            sub.validate().unwrap_err(),
            RideForecastError::Validation { .. }
        ));
    }

    #[test]
    fn test_rejects_empty_name_and_bad_email() {
        let mut sub = subscription();
        sub.name = "  ".to_string();
        assert!(sub.validate().is_err());

        let mut sub = subscription();
        sub.email = "not-an-address".to_string();
        assert!(sub.validate().is_err());
    }

    #[test]
    fn test_round_trips_through_json() {
        let sub = subscription();
        let encoded = serde_json::to_string(&sub).unwrap();
        let decoded: Subscription = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, sub);
    }
}
