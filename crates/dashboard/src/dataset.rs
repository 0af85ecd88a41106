use anyhow::{anyhow, Error};
use serde::Deserialize;
use std::path::Path;
use time::Date;

use crate::ser;

/// One row of the dataset the fetcher produced. Missing temperatures come
/// through as empty CSV fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureRow {
    #[serde(with = "ser::iso_date")]
    pub date: Date,
    pub temp_mean: Option<f64>,
    pub city: String,
}

/// Checked before any socket work: when the fetcher has not produced the
/// dataset yet there is nothing to serve, and startup stops at printing
/// this guidance. `None` means the file exists and serving can proceed.
pub fn missing_dataset_guidance(path: &str) -> Option<String> {
    if Path::new(path).exists() {
        return None;
    }
    Some(format!(
        "Error: the file '{}' was not found.\nMake sure to run the fetcher before starting this dashboard.",
        path
    ))
}

/// Reads the whole dataset into memory. The caller is expected to check the
/// file exists before starting the server; any read or parse failure here is
/// fatal.
pub fn load_dataset(path: &str) -> Result<Vec<TemperatureRow>, Error> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| anyhow!("error opening {}: {}", path, e))?;
    let mut rows = vec![];
    for record in reader.deserialize() {
        let row: TemperatureRow = record.map_err(|e| anyhow!("error reading row: {}", e))?;
        rows.push(row);
    }
    Ok(rows)
}
