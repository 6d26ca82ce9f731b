#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use memento_autofill::geocode::{GeocodeError, ReverseGeocoder};
use memento_autofill::metadata::{Coordinates, Exif, Memento, MetadataSource, Photo};

/// A photo with the given EXIF map and picker-style defaults.
pub fn photo(exif: Exif) -> MetadataSource {
    MetadataSource::Photo(Photo {
        uri: "file://test/image.jpg".into(),
        file_name: Some("image.jpg".into()),
        mime_type: Some("image/jpeg".into()),
        asset_id: Some("asset123".into()),
        exif: Some(exif),
    })
}

/// EXIF with an original capture time and GPS magnitudes plus references.
pub fn exif(date: &str, lat: f64, lat_ref: &str, long: f64, long_ref: &str) -> Exif {
    Exif {
        date_time_original: Some(date.into()),
        gps_latitude: Some(lat),
        gps_latitude_ref: Some(lat_ref.into()),
        gps_longitude: Some(long),
        gps_longitude_ref: Some(long_ref.into()),
        ..Exif::default()
    }
}

/// EXIF with only an original capture time.
pub fn dated(date: &str) -> Exif {
    Exif {
        date_time_original: Some(date.into()),
        ..Exif::default()
    }
}

/// A saved memento.
pub fn memento(id: i64, date: Option<&str>, coordinates: Option<Coordinates>) -> MetadataSource {
    MetadataSource::Memento(Memento {
        id,
        caption: Some("Test Memento".into()),
        date: date.map(str::to_owned),
        coordinates,
        location: None,
        user_id: None,
    })
}

/// Three photos around downtown San Francisco.
pub fn san_francisco() -> Vec<MetadataSource> {
    vec![
        photo(exif("2023:01:15 14:30:00", 37.775, "N", 122.419, "W")),
        photo(exif("2023:01:15 15:00:00", 37.774, "N", 122.42, "W")),
        photo(exif("2023:01:15 16:00:00", 37.776, "N", 122.418, "W")),
    ]
}

/// Two photos in lower Manhattan.
pub fn new_york() -> Vec<MetadataSource> {
    vec![
        photo(exif("2023:01:20 10:00:00", 40.713, "N", 74.006, "W")),
        photo(exif("2023:01:20 11:00:00", 40.714, "N", 74.005, "W")),
    ]
}

/// How a [`MockGeocoder`] answers.
#[derive(Clone)]
pub enum Reply {
    Name(String),
    NoResults,
    ZeroResultsStatus,
    ServerError,
}

/// Geocoder that records every lookup and answers with a fixed [`Reply`],
/// optionally after a delay.
pub struct MockGeocoder {
    reply: Reply,
    delay: Option<Duration>,
    calls: Mutex<Vec<Coordinates>>,
}

impl MockGeocoder {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn named(text: &str) -> Self {
        Self::new(Reply::Name(text.into()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Coordinates> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReverseGeocoder for MockGeocoder {
    async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        self.calls.lock().unwrap().push(coords);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Reply::Name(text) => Ok(text.clone()),
            Reply::NoResults => Err(GeocodeError::NoResults),
            Reply::ZeroResultsStatus => Err(GeocodeError::Status {
                status: "ZERO_RESULTS".into(),
                message: None,
            }),
            Reply::ServerError => Err(GeocodeError::HttpStatus(503)),
        }
    }
}

/// Assert two floats agree to `places` decimal places.
pub fn assert_close(actual: f64, expected: f64, places: i32) {
    let tolerance = 10f64.powi(-places) / 2.0;
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} to {places} places, got {actual}"
    );
}
