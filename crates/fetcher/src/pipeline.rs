use anyhow::Error;
use slog::{info, Logger};

use crate::{combine, create_folder, save_dataset, ArchiveClient, City};

/// Fetches every city sequentially, concatenates whatever succeeded and
/// persists the result under `{data_dir}/raw`. When no city succeeded
/// nothing is written and `None` is returned; partial failure is not an
/// error.
pub async fn process_data(
    logger: &Logger,
    client: &ArchiveClient,
    cities: &[City],
    data_dir: &str,
) -> Result<Option<String>, Error> {
    let batches = client.fetch_all(cities).await?;
    if batches.is_empty() {
        info!(logger, "no city data fetched, nothing to save");
        return Ok(None);
    }

    let observations = combine(batches)?;

    let raw_dir = format!("{}/raw", data_dir);
    create_folder(logger, &raw_dir);
    let saved_path = save_dataset(&observations, &raw_dir)?;
    info!(
        logger,
        "saved {} rows to {}",
        observations.len(),
        saved_path
    );
    Ok(Some(saved_path))
}
