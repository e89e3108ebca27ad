//! In-memory directory.
//!
//! Serves a fixed set of cities and forecasts, either built in code or loaded
//! from a JSON file shaped like:
//!
//! ```json
//! {
//!   "cities": { "paris": { "coordinates": { "lat": 48.85, "lon": 2.35 }, "population": 2148000, "knownFor": ["Louvre"] } },
//!   "weather": { "paris": { "today": { "min": 4, "max": 12 }, "tomorrow": { "min": 5, "max": 14 } } }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use cityguide_protocol::{City, ProtocolError, Weather, When};

use crate::directory::{CityDirectory, DirectoryError};

/// Cities and forecasts served by a [`StaticDirectory`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub cities: HashMap<String, City>,
    #[serde(default)]
    pub weather: HashMap<String, HashMap<When, Weather>>,
}

/// Directory answering from in-memory fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    fixtures: Fixtures,
}

impl StaticDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from fixtures
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    /// Load fixtures from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let fixtures_error = |reason: String| DirectoryError::Fixtures {
            path: path.display().to_string(),
            reason,
        };

        let json = std::fs::read_to_string(path).map_err(|e| fixtures_error(e.to_string()))?;
        let fixtures: Fixtures = serde_json::from_str(&json)
            .map_err(|e| fixtures_error(ProtocolError::from(e).to_string()))?;

        Ok(Self::from_fixtures(fixtures))
    }

    /// Add a city
    pub fn with_city(mut self, city_id: impl Into<String>, city: City) -> Self {
        self.fixtures.cities.insert(city_id.into(), city);
        self
    }

    /// Add a forecast
    pub fn with_weather(mut self, city_id: impl Into<String>, when: When, weather: Weather) -> Self {
        self.fixtures
            .weather
            .entry(city_id.into())
            .or_default()
            .insert(when, weather);
        self
    }

    /// Number of known cities
    pub fn city_count(&self) -> usize {
        self.fixtures.cities.len()
    }
}

#[async_trait]
impl CityDirectory for StaticDirectory {
    async fn city(&self, city_id: &str) -> Result<Option<City>, DirectoryError> {
        Ok(self.fixtures.cities.get(city_id).cloned())
    }

    async fn weather(&self, city_id: &str, when: When) -> Result<Weather, DirectoryError> {
        self.fixtures
            .weather
            .get(city_id)
            .and_then(|forecasts| forecasts.get(&when))
            .copied()
            .ok_or_else(|| DirectoryError::WeatherUnavailable {
                city_id: city_id.to_string(),
                when,
            })
    }
}
