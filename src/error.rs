//! Error types and handling for the `RideForecast` service

use thiserror::Error;

/// Main error type for the `RideForecast` library surface
#[derive(Error, Debug)]
pub enum RideForecastError {
    /// The forecast series contained no entries
    #[error("forecast series contains no entries")]
    EmptySeries,

    /// A selected forecast entry lacks a required field
    #[error("forecast entry at {timestamp} is missing required field `{field}`")]
    MalformedEntry {
        timestamp: i64,
        field: &'static str,
    },

    /// A departure/return time code is outside the valid HHMM range
    #[error("invalid time code {code}: expected HHMM with hour 00-23 and minute 00-59")]
    InvalidTimeCode { code: u16 },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Subscription store errors
    #[error("Subscription store error: {message}")]
    Store { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RideForecastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new subscription store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
