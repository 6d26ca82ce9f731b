//! Metadata extraction — turns a photo or a saved memento into [`PhotoMetadata`].
//!
//! Extraction never fails: missing or malformed EXIF simply leaves `date` or
//! `coordinates` empty for that item.

use super::date::to_iso_date_string;
use super::types::{Coordinates, Exif, Memento, MetadataSource, Photo, PhotoMetadata};

/// MIME type assumed when a photo doesn't report one, and for saved mementos.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// Extract the uniform metadata record for one item.
pub fn relevant_metadata(item: &MetadataSource) -> PhotoMetadata {
    match item {
        MetadataSource::Photo(photo) => photo_metadata(photo),
        MetadataSource::Memento(memento) => memento_metadata(memento),
    }
}

fn photo_metadata(photo: &Photo) -> PhotoMetadata {
    let exif = photo.exif.as_ref();
    PhotoMetadata {
        date: exif.and_then(capture_date),
        coordinates: exif.and_then(gps_coordinates),
        filename: photo.file_name.clone().unwrap_or_default(),
        mime_type: photo
            .mime_type
            .clone()
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
    }
}

fn memento_metadata(memento: &Memento) -> PhotoMetadata {
    PhotoMetadata {
        date: memento.date.clone(),
        coordinates: memento.coordinates,
        filename: String::new(),
        mime_type: DEFAULT_MIME_TYPE.to_string(),
    }
}

/// Capture date, preferring original over digitized over modify time.
/// The first non-empty field wins.
pub fn capture_date(exif: &Exif) -> Option<String> {
    [
        &exif.date_time_original,
        &exif.date_time_digitized,
        &exif.date_time,
    ]
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .map(|value| to_iso_date_string(value))
}

/// Signed coordinates, or `None` unless both GPS magnitudes are present.
///
/// A reference flag without its magnitude means "no GPS".
pub fn gps_coordinates(exif: &Exif) -> Option<Coordinates> {
    let lat = exif.gps_latitude?;
    let long = exif.gps_longitude?;
    Some(Coordinates {
        lat: apply_hemisphere(lat, exif.gps_latitude_ref.as_deref(), "S"),
        long: apply_hemisphere(long, exif.gps_longitude_ref.as_deref(), "W"),
    })
}

// Already-negative magnitudes are left alone so a signed value isn't flipped twice.
fn apply_hemisphere(magnitude: f64, reference: Option<&str>, negative_ref: &str) -> f64 {
    if reference == Some(negative_ref) && magnitude > 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
