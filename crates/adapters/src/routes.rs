//! HTTP routes and handlers.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /cities/:city_id/infos` | [`get_city_infos`] |
//! | `GET /cities/:city_id/recipes` | [`list_recipes`] |
//! | `POST /cities/:city_id/recipes` | [`create_recipe`] |
//! | `DELETE /cities/:city_id/recipes/:recipe_id` | [`delete_recipe`] |
//! | `GET /health` | [`health_check`] |
//! | `GET /json` | OpenAPI document |
//! | `GET /docs/` | Swagger UI reading `/json`; `/` redirects here |

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa_swagger_ui::SwaggerUi;

use cityguide_protocol::{
    CityInfos, CreateRecipeRequest, ErrorBody, HealthReport, WeatherPrediction, When, API_VERSION,
};
use cityguide_recipes::{Recipe, RecipeContent, RecipeId};

use crate::error::ApiError;
use crate::openapi;
use crate::state::AppState;

/// Where the Swagger UI is mounted
pub const DOCS_PATH: &str = "/docs";

/// Where the OpenAPI document is served
pub const OPENAPI_PATH: &str = "/json";

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let docs = SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, openapi::document(state.public_url.as_ref()));

    Router::new()
        .route("/cities/:city_id/infos", get(get_city_infos))
        .route(
            "/cities/:city_id/recipes",
            get(list_recipes).post(create_recipe),
        )
        .route("/cities/:city_id/recipes/:recipe_id", delete(delete_recipe))
        .route("/health", get(health_check))
        .route("/", get(|| async { Redirect::to(&format!("{}/", DOCS_PATH)) }))
        .merge(docs)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Get information for a city, including weather and recipes
#[utoipa::path(
    get,
    path = "/cities/{cityId}/infos",
    tag = "cities",
    params(("cityId" = String, Path, description = "ID of the city")),
    responses(
        (status = 200, description = "Successful response", body = CityInfos),
        (status = 404, description = "City not found", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub async fn get_city_infos(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<CityInfos>, ApiError> {
    let city = state.require_city(&city_id).await?;

    let (today, tomorrow) = tokio::try_join!(
        state.directory.weather(&city_id, When::Today),
        state.directory.weather(&city_id, When::Tomorrow),
    )
    .map_err(|e| {
        error!("Weather lookup for {} failed: {}", city_id, e);
        ApiError::WeatherUnavailable
    })?;

    let weather_predictions = vec![
        WeatherPrediction::new(When::Today, today),
        WeatherPrediction::new(When::Tomorrow, tomorrow),
    ];

    Ok(Json(CityInfos::new(
        city,
        weather_predictions,
        state.recipes.list(&city_id),
    )))
}

/// List the recipes of a city
#[utoipa::path(
    get,
    path = "/cities/{cityId}/recipes",
    tag = "recipes",
    params(("cityId" = String, Path, description = "ID of the city")),
    responses((status = 200, description = "Recipes in submission order", body = [Recipe]))
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Json<Vec<Recipe>> {
    Json(state.recipes.list(&city_id))
}

/// Add a recipe to a city
#[utoipa::path(
    post,
    path = "/cities/{cityId}/recipes",
    tag = "recipes",
    params(("cityId" = String, Path, description = "ID of the city")),
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Bad request (e.g., invalid content)", body = ErrorBody),
        (status = 404, description = "City not found", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    // Content is checked before the (remote) city lookup
    let content = RecipeContent::from_json(body.get("content"))?;
    state.require_city(&city_id).await?;

    let recipe = state.recipes.insert(&city_id, content);
    info!("Added recipe {} to {}", recipe.id, city_id);

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Delete a recipe from a city
#[utoipa::path(
    delete,
    path = "/cities/{cityId}/recipes/{recipeId}",
    tag = "recipes",
    params(
        ("cityId" = String, Path, description = "ID of the city"),
        ("recipeId" = u64, Path, description = "ID of the recipe")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 404, description = "City or recipe not found", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path((city_id, recipe_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.require_city(&city_id).await?;

    // A non-numeric id cannot match any stored recipe
    let recipe_id: RecipeId = recipe_id
        .parse()
        .map_err(|_| ApiError::not_found("Recipe not found"))?;

    state.recipes.remove(&city_id, recipe_id)?;
    info!("Deleted recipe {} from {}", recipe_id, city_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Server is up", body = HealthReport))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let stats = state.recipes.stats();
    Json(HealthReport {
        status: "ok".to_string(),
        version: API_VERSION.to_string(),
        started_at: state.started_at,
        cities: stats.city_count,
        recipes: stats.recipe_count,
    })
}
