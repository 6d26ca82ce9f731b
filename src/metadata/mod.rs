//! Photo metadata aggregation pipeline.
//!
//! [`extract`] normalises each item, [`date`] picks the most common date,
//! [`cluster`] finds the centre of the largest group of coordinates, and
//! [`aggregate`] ties them together with reverse geocoding.

pub mod aggregate;
pub mod cluster;
pub mod date;
pub mod extract;
pub mod types;

pub use aggregate::{aggregate_metadata, Autofill};
pub use types::{
    AggregatedMetadata, Coordinates, Exif, GeoLocation, Memento, MetadataSource, Photo,
    PhotoMetadata,
};
