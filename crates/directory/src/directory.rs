//! Directory trait and errors.

use async_trait::async_trait;
use cityguide_protocol::{City, Weather, When};
use thiserror::Error;

/// Directory-related errors
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid upstream URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid payload from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("No {when} forecast for city {city_id}")]
    WeatherUnavailable { city_id: String, when: When },

    #[error("Failed to load fixtures from {path}: {reason}")]
    Fixtures { path: String, reason: String },
}

/// Source of city descriptions and forecasts.
#[async_trait]
pub trait CityDirectory: Send + Sync {
    /// Look up a city, `None` when the directory does not know it
    async fn city(&self, city_id: &str) -> Result<Option<City>, DirectoryError>;

    /// Forecast for a city on the given day
    async fn weather(&self, city_id: &str, when: When) -> Result<Weather, DirectoryError>;
}
