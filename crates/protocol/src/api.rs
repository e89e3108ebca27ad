//! HTTP API bodies.
//!
//! Request and response shapes served by the Cityguide HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cityguide_recipes::Recipe;

use crate::cities::City;
use crate::weather::WeatherPrediction;

/// Everything known about a city: location, population, forecast, recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityInfos {
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>, example = json!([48.8566, 2.3522]))]
    pub coordinates: [f64; 2],
    pub population: u64,
    pub known_for: Vec<String>,
    /// Today's then tomorrow's forecast
    pub weather_predictions: Vec<WeatherPrediction>,
    pub recipes: Vec<Recipe>,
}

impl CityInfos {
    pub fn new(city: City, weather_predictions: Vec<WeatherPrediction>, recipes: Vec<Recipe>) -> Self {
        Self {
            coordinates: [city.coordinates.lat, city.coordinates.lon],
            population: city.population,
            known_for: city.known_for,
            weather_predictions,
            recipes,
        }
    }
}

/// Body of a recipe creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    /// The recipe content, 10 to 2000 characters
    #[schema(example = "Boil pasta for ten minutes.")]
    pub content: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness report served by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    #[schema(value_type = String, format = DateTime)]
    pub started_at: DateTime<Utc>,
    /// Cities holding recipes
    pub cities: usize,
    /// Recipes currently stored
    pub recipes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::Coordinates;
    use crate::weather::{Weather, When};
    use cityguide_recipes::RecipeId;
    use serde_json::json;

    #[test]
    fn test_city_infos_shape() {
        let city = City {
            coordinates: Coordinates { lat: 48.5, lon: 2.25 },
            population: 2_000_000,
            known_for: vec!["Louvre".to_string()],
        };
        let predictions = vec![
            WeatherPrediction::new(When::Today, Weather { min: 4.0, max: 12.0 }),
            WeatherPrediction::new(When::Tomorrow, Weather { min: 5.0, max: 13.0 }),
        ];
        let recipes = vec![Recipe {
            id: RecipeId(1),
            content: "Boil pasta for ten minutes.".to_string(),
        }];

        let infos = CityInfos::new(city, predictions, recipes);

        assert_eq!(
            serde_json::to_value(&infos).unwrap(),
            json!({
                "coordinates": [48.5, 2.25],
                "population": 2000000,
                "knownFor": ["Louvre"],
                "weatherPredictions": [
                    { "when": "today", "min": 4.0, "max": 12.0 },
                    { "when": "tomorrow", "min": 5.0, "max": 13.0 }
                ],
                "recipes": [{ "id": 1, "content": "Boil pasta for ten minutes." }]
            })
        );
    }

    #[test]
    fn test_error_body() {
        let body = ErrorBody::new("City not found");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"City not found"}"#
        );
    }
}
