//! OpenWeatherMap forecast client
//!
//! Fetches the 5-day/3-hour forecast for a coordinate through the shared
//! retrying API client. The response `list` is handed to the scoring engine
//! as-is; normalization happens at snapshot selection.

use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::API_CLIENT;
use crate::models::{Coordinate, ForecastEntry, ForecastSeries};

const FORECAST_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

/// Fetch the forecast series for a coordinate, metric units
pub async fn get_forecast(coords: Coordinate) -> Result<ForecastSeries> {
    tracing::debug!("Getting weather data for {}", coords.format_coordinates());

    let api_key =
        env::var("OPENWEATHER_API_KEY").context("Missing OPENWEATHER_API_KEY env var")?;
    let url = format!(
        "{FORECAST_BASE_URL}?lat={}&lon={}&units=metric&appid={api_key}",
        coords.latitude, coords.longitude
    );

    let response = API_CLIENT
        .get(url)
        .send()
        .await
        .context("Forecast request failed")?;
    let response: ForecastResponse = response
        .json()
        .await
        .context("Failed to parse forecast response")?;

    tracing::debug!("Got {} forecast entries", response.list.len());
    Ok(ForecastSeries::new(response.list))
}
