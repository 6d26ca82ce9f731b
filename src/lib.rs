//! Photo metadata aggregation for Memento.
//!
//! When a user builds a memento from a handful of photos (or a collection from
//! existing mementos), the form is pre-filled with a single date and a single
//! named place inferred from the items:
//!
//! | Field | Source | Rule |
//! |-------|--------|------|
//! | **Date** | EXIF `DateTimeOriginal` → `DateTimeDigitized` → `DateTime`, or a memento's saved date | Most common date, first seen wins a tie |
//! | **Location** | EXIF GPS tags with `N`/`S`/`E`/`W` references, or a memento's saved coordinates | Centre of the largest 0.1° proximity cluster, reverse geocoded to a city |
//!
//! Aggregation is best-effort autofill: it never returns an error. Missing
//! data yields `None`, and a failed geocode yields a location with empty text.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`metadata`] — Extraction, date selection, clustering, and the aggregation entry point
//! - [`geocode`] — Reverse geocoding trait and the Google Geocoding API client
//! - [`exif_reader`] — Reading EXIF tags from image files into [`metadata::Photo`]

pub mod config;
pub mod exif_reader;
pub mod geocode;
pub mod metadata;
