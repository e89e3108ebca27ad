//! Recipe errors module

use thiserror::Error;

use crate::content::ContentViolation;
use crate::store::RecipeId;

/// Errors returned by recipe validation and store operations.
///
/// Every variant is terminal for the triggering request and leaves the store
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("{violation}")]
    ValidationFailed { violation: ContentViolation },

    #[error("Recipe not found for this city")]
    CityNotFound { city_id: String },

    #[error("Recipe not found")]
    RecipeNotFound { city_id: String, recipe_id: RecipeId },
}

impl RecipeError {
    /// Whether this error means the city or recipe is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecipeError::CityNotFound { .. } | RecipeError::RecipeNotFound { .. }
        )
    }
}

impl From<ContentViolation> for RecipeError {
    fn from(violation: ContentViolation) -> Self {
        RecipeError::ValidationFailed { violation }
    }
}
