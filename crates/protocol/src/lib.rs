//! Cityguide wire types
//!
//! This crate defines the JSON payloads exchanged with clients of the HTTP API
//! and with the upstream city/weather directory, so both sides agree on field
//! names and shapes.

pub mod api;
pub mod cities;
pub mod errors;
pub mod weather;

pub use api::{CityInfos, CreateRecipeRequest, ErrorBody, HealthReport};
pub use cities::{City, Coordinates};
pub use cityguide_recipes::{Recipe, RecipeId};
pub use errors::ProtocolError;
pub use weather::{Weather, WeatherPrediction, When};

/// Version of the Cityguide HTTP API
pub const API_VERSION: &str = "0.1.0";
