//! Reverse geocoding: coordinates in, display text out.
//!
//! Provides the [`ReverseGeocoder`] trait, an HTTP implementation against the
//! Google Geocoding API ([`google::GoogleGeocoder`]) and [`reverse_city_geocode`],
//! the boundary where every geocoding failure collapses into an empty name.
//! The geocoder is created via [`create_geocoder`] from configuration.

pub mod google;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::config::GeocodingConfig;
use crate::metadata::types::{Coordinates, GeoLocation};

/// Why a reverse-geocoding request produced no name.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no geocoding API key configured")]
    MissingApiKey,

    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoding service returned HTTP {0}")]
    HttpStatus(u16),

    #[error("could not decode geocoding response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("geocoding failed with status {status}{}", detail(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    #[error("geocoding returned no results")]
    NoResults,
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Turns a coordinate pair into a human-readable place name.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve `coords` to a locality-level name.
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, GeocodeError>;
}

/// Geocoder used when no API key is configured. Every lookup fails, so
/// aggregated locations come back unnamed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGeocoder;

#[async_trait]
impl ReverseGeocoder for NoopGeocoder {
    async fn reverse_geocode(&self, _coords: Coordinates) -> Result<String, GeocodeError> {
        Err(GeocodeError::MissingApiKey)
    }
}

/// Resolve the name for `coords`, never failing.
///
/// Any error is logged and replaced by an empty `text`; the coordinates are
/// always kept.
pub async fn reverse_city_geocode(
    geocoder: &dyn ReverseGeocoder,
    coords: Coordinates,
) -> GeoLocation {
    match geocoder.reverse_geocode(coords).await {
        Ok(text) => GeoLocation::new(coords, text),
        Err(e) => {
            warn!(lat = coords.lat, long = coords.long, error = %e, "reverse geocoding failed");
            GeoLocation::unnamed(coords)
        }
    }
}

/// Create a geocoder from config.
///
/// Without an API key this falls back to [`NoopGeocoder`] rather than failing,
/// since a missing place name only costs the user some autofill.
pub fn create_geocoder(config: &GeocodingConfig) -> anyhow::Result<Box<dyn ReverseGeocoder>> {
    if config.api_key.is_empty() {
        warn!("no geocoding API key set; locations will be left unnamed");
        return Ok(Box::new(NoopGeocoder));
    }
    let geocoder = google::GoogleGeocoder::new(config)?;
    Ok(Box::new(geocoder))
}
