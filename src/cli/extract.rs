//! CLI `extract` command — show what the pipeline sees in each photo.

use std::path::PathBuf;

use anyhow::Result;
use memento_autofill::exif_reader::read_photo;
use memento_autofill::metadata::extract::relevant_metadata;
use memento_autofill::metadata::{MetadataSource, PhotoMetadata};

/// Print one JSON metadata record per file.
pub fn extract(files: &[PathBuf]) -> Result<()> {
    let metadatas = files
        .iter()
        .map(|path| {
            let photo = read_photo(path)?;
            Ok(relevant_metadata(&MetadataSource::Photo(photo)))
        })
        .collect::<Result<Vec<PhotoMetadata>>>()?;

    println!("{}", serde_json::to_string_pretty(&metadatas)?);
    Ok(())
}
