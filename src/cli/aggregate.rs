//! CLI `aggregate` command — run the full pipeline over photos and saved mementos.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use memento_autofill::config::MementoConfig;
use memento_autofill::exif_reader::read_photo;
use memento_autofill::geocode::create_geocoder;
use memento_autofill::metadata::{aggregate_metadata, Memento, MetadataSource};

/// Aggregate the given photos, followed by any mementos in `records`, and
/// print the result as JSON.
pub async fn aggregate(
    config: &MementoConfig,
    files: &[PathBuf],
    records: Option<&Path>,
) -> Result<()> {
    let mut items: Vec<MetadataSource> = files
        .iter()
        .map(|path| read_photo(path).map(MetadataSource::from))
        .collect::<Result<_>>()?;

    if let Some(path) = records {
        items.extend(load_records(path)?.into_iter().map(MetadataSource::from));
    }

    let geocoder = create_geocoder(&config.geocoding)?;
    let result = aggregate_metadata(&items, geocoder.as_ref()).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<Memento>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse mementos from {}", path.display()))
}
