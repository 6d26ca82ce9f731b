//! Build [`Photo`] values from image files on disk.
//!
//! Reads the primary IFD with `kamadak-exif` and keeps only the tags the
//! aggregation pipeline uses. Files without EXIF (or in formats the reader
//! doesn't understand) yield an empty [`Exif`] instead of an error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};

use crate::metadata::types::{Exif, Photo};

/// Read a photo and its EXIF tags from `path`.
///
/// Fails only when the file can't be opened.
pub fn read_photo(path: impl AsRef<Path>) -> Result<Photo> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(data) => exif_fields(&data),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable EXIF");
            Exif::default()
        }
    };

    Ok(Photo {
        uri: format!("file://{}", path.display()),
        file_name: path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned),
        mime_type: mime_type_for(path).map(str::to_owned),
        asset_id: None,
        exif: Some(exif),
    })
}

fn exif_fields(data: &exif::Exif) -> Exif {
    Exif {
        date_time_original: ascii_field(data, Tag::DateTimeOriginal),
        date_time_digitized: ascii_field(data, Tag::DateTimeDigitized),
        date_time: ascii_field(data, Tag::DateTime),
        gps_latitude: data
            .get_field(Tag::GPSLatitude, In::PRIMARY)
            .and_then(|f| dms_to_degrees(&f.value)),
        gps_latitude_ref: ascii_field(data, Tag::GPSLatitudeRef),
        gps_longitude: data
            .get_field(Tag::GPSLongitude, In::PRIMARY)
            .and_then(|f| dms_to_degrees(&f.value)),
        gps_longitude_ref: ascii_field(data, Tag::GPSLongitudeRef),
    }
}

// Raw ASCII keeps timestamps in their `YYYY:MM:DD HH:MM:SS` form;
// `display_value` would reformat them.
fn ascii_field(data: &exif::Exif, tag: Tag) -> Option<String> {
    match &data.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Degrees/minutes/seconds rationals to unsigned decimal degrees.
fn dms_to_degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(parts) if parts.len() >= 3 => {
            let degrees = parts[0].to_f64();
            let minutes = parts[1].to_f64();
            let seconds = parts[2].to_f64();
            let total = degrees + minutes / 60.0 + seconds / 3600.0;
            total.is_finite().then_some(total)
        }
        _ => None,
    }
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
