//! API errors and their HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use cityguide_protocol::ErrorBody;
use cityguide_recipes::RecipeError;

/// Errors a handler can answer with. The `Display` output is the `error`
/// field of the JSON body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{reason}")]
    BadRequest { reason: String },

    #[error("{reason}")]
    NotFound { reason: String },

    #[error("Failed to fetch weather data")]
    WeatherUnavailable,

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ApiError::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        ApiError::NotFound {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::WeatherUnavailable | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        if err.is_not_found() {
            ApiError::not_found(err.to_string())
        } else {
            ApiError::bad_request(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityguide_recipes::{ContentViolation, RecipeId};

    #[test]
    fn test_recipe_error_mapping() {
        let err = ApiError::from(RecipeError::ValidationFailed {
            violation: ContentViolation::Empty,
        });
        assert_eq!(err, ApiError::bad_request("Recipe content cannot be empty"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(RecipeError::CityNotFound {
            city_id: "paris".to_string(),
        });
        assert_eq!(err, ApiError::not_found("Recipe not found for this city"));

        let err = ApiError::from(RecipeError::RecipeNotFound {
            city_id: "paris".to_string(),
            recipe_id: RecipeId(9),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Recipe not found");
    }

    #[test]
    fn test_server_errors_hide_details() {
        assert_eq!(ApiError::Internal.to_string(), "Internal Server Error");
        assert_eq!(
            ApiError::WeatherUnavailable.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
