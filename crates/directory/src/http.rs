//! HTTP Directory Module
//!
//! Client for the upstream REST directory:
//! - `GET {base}/cities/{cityId}` returns a city, 404 when unknown
//! - `GET {base}/weather?cityId={cityId}&when={today|tomorrow}` returns a forecast

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use url::Url;

use cityguide_protocol::{City, Weather, When};

use crate::directory::{CityDirectory, DirectoryError};

/// Default upstream directory
pub const DEFAULT_UPSTREAM_URL: &str = "https://api-ugi2pflmha-ew.a.run.app";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpDirectory`]
#[derive(Debug, Clone)]
pub struct HttpDirectoryConfig {
    /// Base URL of the upstream API
    pub base_url: Url,
    /// Timeout applied to each upstream request
    pub timeout: Duration,
}

/// Directory backed by the upstream HTTP API
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Create a client for the configured upstream
    pub fn new(config: HttpDirectoryConfig) -> Result<Self, DirectoryError> {
        if config.base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl {
                reason: format!("{} cannot be used as a base URL", config.base_url),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| DirectoryError::Request {
                url: config.base_url.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Base URL of the upstream API
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a city resource; the id is percent-encoded as one path segment
    pub fn city_url(&self, city_id: &str) -> Url {
        self.endpoint(&["cities", city_id])
    }

    /// URL of a forecast query
    pub fn weather_url(&self, city_id: &str, when: When) -> Url {
        let mut url = self.endpoint(&["weather"]);
        url.query_pairs_mut()
            .append_pair("cityId", city_id)
            .append_pair("when", when.as_str());
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a URL, returning `None` on 404 and the body otherwise
    async fn fetch(&self, url: &Url) -> Result<Option<String>, DirectoryError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| DirectoryError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| DirectoryError::Request {
                url: url.to_string(),
                source,
            })?;

        Ok(Some(body))
    }
}

#[async_trait]
impl CityDirectory for HttpDirectory {
    async fn city(&self, city_id: &str) -> Result<Option<City>, DirectoryError> {
        let url = self.city_url(city_id);

        match self.fetch(&url).await? {
            Some(body) => City::from_json(&body)
                .map(Some)
                .map_err(|e| DirectoryError::Decode {
                    url: url.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    async fn weather(&self, city_id: &str, when: When) -> Result<Weather, DirectoryError> {
        let url = self.weather_url(city_id, when);

        let body = self
            .fetch(&url)
            .await?
            .ok_or_else(|| DirectoryError::WeatherUnavailable {
                city_id: city_id.to_string(),
                when,
            })?;

        Weather::from_json(&body).map_err(|e| DirectoryError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
