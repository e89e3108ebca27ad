//! CLI command modules

pub mod check;
pub mod lookup;
pub mod serve;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

use cityguide_directory::{CityDirectory, HttpDirectory, HttpDirectoryConfig, StaticDirectory};

pub use check::execute_check_recipe_command;
pub use lookup::{execute_lookup_command, LookupArgs};
pub use serve::{execute_serve_command, ServeArgs};

/// Where city and weather data come from
#[derive(Debug, Clone)]
pub struct UpstreamOptions {
    /// Base URL of the upstream API
    pub upstream_url: Url,
    /// Upstream request timeout
    pub timeout: Duration,
    /// Fixtures file replacing the upstream API
    pub fixtures: Option<PathBuf>,
}

/// Build the directory selected by the options
pub fn build_directory(options: &UpstreamOptions) -> Result<Arc<dyn CityDirectory>> {
    if let Some(path) = &options.fixtures {
        let directory = StaticDirectory::from_file(path)
            .with_context(|| format!("Failed to load fixtures: {}", path.display()))?;
        info!(
            "Serving {} cities from fixtures {}",
            directory.city_count(),
            path.display()
        );
        return Ok(Arc::new(directory));
    }

    let directory = HttpDirectory::new(HttpDirectoryConfig {
        base_url: options.upstream_url.clone(),
        timeout: options.timeout,
    })
    .context("Failed to create upstream client")?;
    info!("Using upstream directory {}", directory.base_url());

    Ok(Arc::new(directory))
}
