//! Google Geocoding API client.
//!
//! Reference: <https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding>

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::{GeocodeError, ReverseGeocoder};
use crate::config::GeocodingConfig;
use crate::metadata::types::Coordinates;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted_address: Option<String>,
}

/// Reverse geocoder backed by the Google Geocoding JSON endpoint.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    result_type: String,
}

impl GoogleGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Self::with_client(config, client)
    }

    /// Use a caller-built client (custom proxy or TLS settings).
    pub fn with_client(config: &GeocodingConfig, client: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid geocoding endpoint: {}", config.endpoint))?;
        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            result_type: config.result_type.clone(),
        })
    }

    /// Full request URL for `coords`, including the API key.
    pub fn request_url(&self, coords: Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latlng", &format!("{},{}", coords.lat, coords.long))
            .append_pair("key", &self.api_key)
            .append_pair("result_type", &self.result_type);
        url
    }
}

#[async_trait]
impl ReverseGeocoder for GoogleGeocoder {
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        // The request URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .get(self.request_url(coords))
            .send()
            .await
            .map_err(|e| GeocodeError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Http(e.without_url()))?;
        let text = first_formatted_address(&body)?;
        tracing::debug!(lat = coords.lat, long = coords.long, place = %text, "reverse geocoded");
        Ok(text)
    }
}

/// Pull the first result's `formatted_address` out of a response body.
fn first_formatted_address(body: &str) -> Result<String, GeocodeError> {
    let response: GeocodeResponse = serde_json::from_str(body)?;
    if response.status != "OK" {
        return Err(GeocodeError::Status {
            status: response.status,
            message: response.error_message,
        });
    }
    let first = response
        .results
        .into_iter()
        .next()
        .ok_or(GeocodeError::NoResults)?;
    Ok(first.formatted_address.unwrap_or_default())
}
