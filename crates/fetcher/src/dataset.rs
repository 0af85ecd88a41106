use anyhow::{anyhow, Error};
use serde::Serialize;
use time::Date;

use crate::{ser, CityBatch};

/// One row of the combined dataset, serialized to CSV as
/// `date,temp_mean,city`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyObservation {
    #[serde(with = "ser::iso_date")]
    pub date: Date,
    pub temp_mean: Option<f64>,
    pub city: String,
}

/// Concatenates the per-city batches in input order, renaming the raw
/// `time`/`temperature_2m_mean` columns to `date`/`temp_mean` and parsing
/// the date strings. Row order within a batch is preserved.
pub fn combine(batches: Vec<CityBatch>) -> Result<Vec<DailyObservation>, Error> {
    let mut observations = vec![];
    for batch in batches {
        if batch.daily.time.len() != batch.daily.temperature_2m_mean.len() {
            return Err(anyhow!(
                "column length mismatch for {}: {} dates, {} temperatures",
                batch.city,
                batch.daily.time.len(),
                batch.daily.temperature_2m_mean.len()
            ));
        }
        for (raw_date, temp_mean) in batch
            .daily
            .time
            .iter()
            .zip(batch.daily.temperature_2m_mean.iter())
        {
            let date = Date::parse(raw_date, &ser::iso_date::ISO_DATE)
                .map_err(|e| anyhow!("error parsing date {}: {}", raw_date, e))?;
            observations.push(DailyObservation {
                date,
                temp_mean: *temp_mean,
                city: batch.city.clone(),
            });
        }
    }
    Ok(observations)
}
