//! City directory payloads.
//!
//! The upstream directory describes a city with its coordinates, population
//! and a list of things it is known for. Extra fields are ignored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ProtocolError;

/// Geographic position of a city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// A city as returned by the upstream directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub coordinates: Coordinates,
    pub population: u64,
    #[serde(default)]
    pub known_for: Vec<String>,
}

impl City {
    /// Decode a city from an upstream JSON body
    pub fn from_json(body: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upstream_city() {
        let body = r#"{
            "id": "paris",
            "name": "Paris",
            "coordinates": { "lat": 48.8566, "lon": 2.3522 },
            "population": 2148000,
            "knownFor": ["Eiffel Tower", "Louvre"]
        }"#;

        let city = City::from_json(body).unwrap();
        assert_eq!(city.population, 2_148_000);
        assert_eq!(city.known_for, vec!["Eiffel Tower", "Louvre"]);
        assert_eq!(city.coordinates.lat, 48.8566);
    }

    #[test]
    fn test_decode_missing_known_for() {
        let body = r#"{"coordinates": {"lat": 1.0, "lon": 2.0}, "population": 10}"#;
        let city = City::from_json(body).unwrap();
        assert!(city.known_for.is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            City::from_json("not json"),
            Err(ProtocolError::SerializationError { .. })
        ));
        assert!(City::from_json(r#"{"population": 10}"#).is_err());
    }
}
