use anyhow::{anyhow, Error};
use slog::{error, info, Logger};
use std::{fs, path::Path};

use crate::DailyObservation;

pub const DATASET_FILE_NAME: &str = "temperatures_2023.csv";

pub fn create_folder(logger: &Logger, root_path: &str) {
    let path = Path::new(root_path);

    if !path.exists() || !path.is_dir() {
        // Create the folder if it doesn't exist
        if let Err(err) = fs::create_dir_all(path) {
            error!(logger, "error creating folder: {}", err);
        } else {
            info!(logger, "folder created: {}", root_path);
        }
    } else {
        info!(logger, "folder already exists: {}", root_path);
    }
}

/// Writes the combined dataset to `{folder}/temperatures_2023.csv` with a
/// header row and no index column, truncating any previous file.
pub fn save_dataset(observations: &[DailyObservation], folder: &str) -> Result<String, Error> {
    let full_name = format!("{}/{}", folder, DATASET_FILE_NAME);

    let mut writer = csv::Writer::from_path(&full_name)
        .map_err(|e| anyhow!("error creating {}: {}", full_name, e))?;
    for observation in observations {
        writer
            .serialize(observation)
            .map_err(|e| anyhow!("error writing row: {}", e))?;
    }
    writer
        .flush()
        .map_err(|e| anyhow!("error flushing {}: {}", full_name, e))?;

    Ok(full_name)
}
