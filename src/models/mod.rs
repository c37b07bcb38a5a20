//! Data models for forecasts, weather snapshots, and subscriptions

pub mod forecast;
pub mod location;
pub mod subscription;
pub mod weather;

pub use forecast::{ForecastEntry, ForecastSeries};
pub use location::Coordinate;
pub use subscription::Subscription;
pub use weather::{TemperatureRange, WeatherSnapshot, Wind};
