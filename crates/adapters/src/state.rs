//! Shared handler state.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::error;
use url::Url;

use cityguide_directory::CityDirectory;
use cityguide_protocol::City;
use cityguide_recipes::RecipeStore;

use crate::error::ApiError;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Recipes submitted through this process
    pub recipes: Arc<RecipeStore>,
    /// Upstream city and weather directory
    pub directory: Arc<dyn CityDirectory>,
    /// Externally visible URL, advertised in the OpenAPI document
    pub public_url: Option<Url>,
    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with an empty recipe store
    pub fn new(directory: Arc<dyn CityDirectory>) -> Self {
        Self {
            recipes: Arc::new(RecipeStore::new()),
            directory,
            public_url: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_public_url(mut self, public_url: Option<Url>) -> Self {
        self.public_url = public_url;
        self
    }

    /// Look up a city, answering 404 when the directory does not know it
    pub async fn require_city(&self, city_id: &str) -> Result<City, ApiError> {
        match self.directory.city(city_id).await {
            Ok(Some(city)) => Ok(city),
            Ok(None) => Err(ApiError::not_found("City not found")),
            Err(e) => {
                error!("City lookup for {} failed: {}", city_id, e);
                Err(ApiError::Internal)
            }
        }
    }
}
