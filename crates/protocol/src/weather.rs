//! Weather forecast payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::errors::ProtocolError;

/// Forecast day relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum When {
    Today,
    Tomorrow,
}

impl When {
    /// Both forecast days, in response order
    pub const ALL: [When; 2] = [When::Today, When::Tomorrow];

    pub fn as_str(&self) -> &'static str {
        match self {
            When::Today => "today",
            When::Tomorrow => "tomorrow",
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature range forecast by the upstream weather API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Weather {
    pub min: f64,
    pub max: f64,
}

impl Weather {
    /// Decode a forecast from an upstream JSON body
    pub fn from_json(body: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// A forecast tagged with its day, as embedded in city infos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherPrediction {
    pub when: When,
    pub min: f64,
    pub max: f64,
}

impl WeatherPrediction {
    pub fn new(when: When, weather: Weather) -> Self {
        Self {
            when,
            min: weather.min,
            max: weather.max,
        }
    }
}
