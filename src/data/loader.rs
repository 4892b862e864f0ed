use std::io;
use std::path::Path;

use thiserror::Error;

use super::model::{CatalogRecord, DebrisDataset};

// ---------------------------------------------------------------------------
// LoadError – the two failure kinds surfaced to the user
// ---------------------------------------------------------------------------

/// Why a catalog could not be loaded.  A missing file is reported
/// separately from every other read or parse failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not find file '{path}'")]
    NotFound { path: String },
    #[error("{0}")]
    Parse(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a satellite catalog CSV and produce the filtered dataset.
///
/// Rows are deserialized by header name, so column order does not matter
/// and unknown columns are ignored.  Rows without a usable altitude are
/// silently dropped; any malformed row aborts the whole load.
pub fn load_catalog(path: &Path) -> Result<DebrisDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        let not_found = matches!(
            e.kind(),
            csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound
        );
        if not_found {
            LoadError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            LoadError::Parse(e)
        }
    })?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: CatalogRecord = result?;
        records.push(record);
    }
    let total = records.len();

    let dataset = DebrisDataset::from_records(records);
    log::info!(
        "loaded {} of {} catalog rows with usable altitudes from {}",
        dataset.len(),
        total,
        path.display()
    );
    Ok(dataset)
}
