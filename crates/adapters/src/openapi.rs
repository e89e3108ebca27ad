//! OpenAPI document for the HTTP API.

use url::Url;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use cityguide_protocol::{
    CityInfos, Coordinates, CreateRecipeRequest, ErrorBody, HealthReport, WeatherPrediction, When,
};
use cityguide_recipes::Recipe;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cityguide API",
        description = "City information, two-day weather forecasts and user-contributed recipes."
    ),
    paths(
        routes::get_city_infos,
        routes::list_recipes,
        routes::create_recipe,
        routes::delete_recipe,
        routes::health_check,
    ),
    components(schemas(
        CityInfos,
        Coordinates,
        WeatherPrediction,
        When,
        Recipe,
        CreateRecipeRequest,
        ErrorBody,
        HealthReport,
    )),
    tags(
        (name = "cities", description = "City information"),
        (name = "recipes", description = "Recipes attached to a city"),
        (name = "health", description = "Server status")
    )
)]
pub struct ApiDoc;

/// Build the document, advertising `public_url` as the server when known
pub fn document(public_url: Option<&Url>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = public_url {
        doc.servers = Some(vec![Server::new(url.as_str().trim_end_matches('/'))]);
    }
    doc
}
