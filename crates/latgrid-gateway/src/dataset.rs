//! Startup dataset loading.
//!
//! A missing file is recoverable: the service starts with an empty dataset and
//! every region reports the zero record. An unreadable or corrupt file is a
//! startup fault; the process must fail fast rather than serve partial data.

use std::fs;
use std::io::ErrorKind;

use latgrid_core::error::{LatGridError, Result};
use latgrid_core::model::Dataset;

pub fn load_from_file(path: &str) -> Result<Dataset> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "dataset file not found, starting with an empty dataset");
            return Ok(Dataset::empty());
        }
        Err(e) => return Err(LatGridError::Dataset(format!("read {path} failed: {e}"))),
    };

    let ds = Dataset::from_json_str(&s)?;
    tracing::info!(%path, records = ds.len(), "dataset loaded");
    Ok(ds)
}
