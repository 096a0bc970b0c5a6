//! Current weather from Open-Meteo.

use super::{get_text, FeedError};
use crate::constants::WEATHER_URL;
use serde::Deserialize;

/// Current conditions at the configured coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    #[serde(default)]
    pub windspeed: Option<f64>,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: Weather,
}

/// Forecast endpoint for Recife's fixed coordinates.
pub fn weather_url() -> &'static str {
    WEATHER_URL
}

/// Extract `current_weather` from a forecast response body.
pub fn parse_weather(body: &str) -> Result<Weather, FeedError> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    Ok(response.current_weather)
}

pub fn fetch_weather(agent: &ureq::Agent) -> Result<Weather, FeedError> {
    parse_weather(&get_text(agent, weather_url())?)
}
