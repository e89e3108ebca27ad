//! Lookup command implementation
//!
//! This module implements the `cityguide lookup` command, which queries the
//! directory directly and prints what `GET /cities/{cityId}/infos` would
//! return for a fresh server.

use anyhow::{Context, Result};

use cityguide_directory::CityDirectory;
use cityguide_protocol::{CityInfos, WeatherPrediction, When};

use super::{build_directory, UpstreamOptions};

/// Arguments for the lookup command
pub struct LookupArgs {
    /// City identifier
    pub city_id: String,
    /// City and weather source
    pub upstream: UpstreamOptions,
}

/// Execute the lookup command
pub async fn execute_lookup_command(args: LookupArgs) -> Result<()> {
    let directory = build_directory(&args.upstream)?;
    let infos = lookup_city_infos(directory.as_ref(), &args.city_id).await?;

    println!("{}", serde_json::to_string_pretty(&infos)?);
    Ok(())
}

/// Fetch a city and both forecasts
pub async fn lookup_city_infos(directory: &dyn CityDirectory, city_id: &str) -> Result<CityInfos> {
    let city = directory
        .city(city_id)
        .await
        .with_context(|| format!("Failed to look up city {}", city_id))?
        .with_context(|| format!("City not found: {}", city_id))?;

    let mut weather_predictions = Vec::with_capacity(When::ALL.len());
    for when in When::ALL {
        let weather = directory
            .weather(city_id, when)
            .await
            .with_context(|| format!("Failed to fetch {} weather for {}", when, city_id))?;
        weather_predictions.push(WeatherPrediction::new(when, weather));
    }

    Ok(CityInfos::new(city, weather_predictions, Vec::new()))
}
