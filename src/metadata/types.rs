//! Input and output shapes of the aggregation pipeline.
//!
//! Inputs are either a [`Photo`] straight from the device (with an optional
//! [`Exif`] map) or a saved [`Memento`]; both are wrapped in
//! [`MetadataSource`]. Each is normalised into a [`PhotoMetadata`], and the
//! pipeline's answer is an [`AggregatedMetadata`].

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialise an optional value, treating a wrongly typed one as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Signed decimal degrees. No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// The subset of EXIF tags the pipeline reads, keyed by their EXIF tag names.
///
/// GPS magnitudes are unsigned decimal degrees; the hemisphere lives in the
/// matching `*Ref` field. A value of the wrong type reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exif {
    #[serde(
        rename = "DateTimeOriginal",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time_original: Option<String>,
    #[serde(
        rename = "DateTimeDigitized",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time_digitized: Option<String>,
    #[serde(
        rename = "DateTime",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time: Option<String>,
    #[serde(
        rename = "GPSLatitude",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_latitude: Option<f64>,
    #[serde(
        rename = "GPSLatitudeRef",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_latitude_ref: Option<String>,
    #[serde(
        rename = "GPSLongitude",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_longitude: Option<f64>,
    #[serde(
        rename = "GPSLongitudeRef",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gps_longitude_ref: Option<String>,
}

/// A photo picked from the device library or camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub exif: Option<Exif>,
}

/// A memento that has already been saved. Its `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memento {
    pub id: i64,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// One item handed to the aggregator.
///
/// Deserialises untagged: an object with a `uri` is a photo, anything else
/// with an `id` is a saved memento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataSource {
    Photo(Photo),
    Memento(Memento),
}

impl From<Photo> for MetadataSource {
    fn from(photo: Photo) -> Self {
        Self::Photo(photo)
    }
}

impl From<Memento> for MetadataSource {
    fn from(memento: Memento) -> Self {
        Self::Memento(memento)
    }
}

/// Uniform view of one item after extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoMetadata {
    /// Normalised `YYYY-MM-DD`, or `None` when no timestamp was present.
    pub date: Option<String>,
    pub coordinates: Option<Coordinates>,
    /// Empty for saved mementos and for photos without a file name.
    pub filename: String,
    pub mime_type: String,
}

/// A position plus its display name. `text` is empty when reverse geocoding
/// produced nothing, so it is always safe to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub long: f64,
    pub text: String,
}

impl GeoLocation {
    pub fn new(coords: Coordinates, text: impl Into<String>) -> Self {
        Self {
            lat: coords.lat,
            long: coords.long,
            text: text.into(),
        }
    }

    /// A location whose name could not be resolved.
    pub fn unnamed(coords: Coordinates) -> Self {
        Self::new(coords, String::new())
    }
}

/// Values used to pre-fill the date picker and location input of a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedMetadata {
    pub date: Option<NaiveDate>,
    pub location: Option<GeoLocation>,
}
