//! Top-level aggregation: many items in, one date and one named place out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::cluster::largest_cluster_center;
use super::date::{date_from_iso, most_common_date};
use super::extract::relevant_metadata;
use super::types::{AggregatedMetadata, MetadataSource, PhotoMetadata};
use crate::geocode::{reverse_city_geocode, ReverseGeocoder};

/// Aggregate the metadata of `items` into a single date and location.
///
/// - Date: the most common capture date (first seen wins a tie).
/// - Location: centre of the largest coordinate cluster, named by `geocoder`.
///
/// Never fails. Geocoding problems leave `location.text` empty, and the
/// geocoder is only called when at least one item has coordinates.
pub async fn aggregate_metadata(
    items: &[MetadataSource],
    geocoder: &dyn ReverseGeocoder,
) -> AggregatedMetadata {
    let metadatas: Vec<PhotoMetadata> = items.iter().map(relevant_metadata).collect();

    let date = most_common_date(&metadatas);
    let center = largest_cluster_center(&metadatas);
    debug!(items = items.len(), date = ?date, center = ?center, "aggregated metadata");

    let location = match center {
        Some(coords) => Some(reverse_city_geocode(geocoder, coords).await),
        None => None,
    };

    AggregatedMetadata {
        date: date.as_deref().and_then(date_from_iso),
        location,
    }
}

/// Runs aggregations for one form and drops results that went stale.
///
/// Every call to [`Autofill::aggregate`] takes a new generation. If another
/// call starts (or [`Autofill::supersede`] is called) while a geocode request
/// is still in flight, the older call returns `None` so its result can't
/// overwrite newer form state.
pub struct Autofill {
    geocoder: Arc<dyn ReverseGeocoder>,
    generation: AtomicU64,
}

impl Autofill {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self {
            geocoder,
            generation: AtomicU64::new(0),
        }
    }

    /// Invalidate every in-flight aggregation. Returns the new generation.
    pub fn supersede(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Aggregate `items`, or `None` if a newer call superseded this one.
    pub async fn aggregate(&self, items: &[MetadataSource]) -> Option<AggregatedMetadata> {
        let generation = self.supersede();
        let result = aggregate_metadata(items, self.geocoder.as_ref()).await;

        if self.is_current(generation) {
            Some(result)
        } else {
            debug!(generation, "discarding superseded aggregation");
            None
        }
    }
}
