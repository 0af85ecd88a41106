use anyhow::{anyhow, Error};
use reqwest::Client;
use serde::Deserialize;
use slog::{debug, error, info, Logger};

use crate::City;

pub const DEFAULT_BASE_URL: &str = "https://archive-api.open-meteo.com";
pub const START_DATE: &str = "2023-01-01";
pub const END_DATE: &str = "2023-12-31";

/// The `daily` object of an archive API response: equal-length columns,
/// one entry per day of the requested range.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_mean: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub daily: DailySeries,
}

/// One city's raw batch, tagged with the city name it was requested for.
#[derive(Debug, Clone)]
pub struct CityBatch {
    pub city: String,
    pub daily: DailySeries,
}

pub struct ArchiveClient {
    logger: Logger,
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(logger: Logger, base_url: String) -> Self {
        ArchiveClient {
            logger,
            client: Client::new(),
            base_url,
        }
    }

    fn archive_url(&self, city: &City) -> String {
        format!(
            "{}/v1/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily=temperature_2m_mean&timezone=auto",
            self.base_url, city.latitude, city.longitude, START_DATE, END_DATE
        )
    }

    /// Requests the daily mean temperature series for one city. A non-200
    /// status or transport failure is logged and reported as `None` so the
    /// caller can continue with the remaining cities.
    pub async fn fetch_daily_mean(&self, city: &City) -> Result<Option<CityBatch>, Error> {
        let url = self.archive_url(city);
        debug!(self.logger, "requesting: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(self.logger, "error fetching data for {}: {}", city.name, e);
                return Ok(None);
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            error!(
                self.logger,
                "error fetching data for {}, status: {}", city.name, status
            );
            return Ok(None);
        }

        let archive: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("error parsing body for {}: {}", city.name, e))?;

        info!(self.logger, "fetched data for {}", city.name);
        Ok(Some(CityBatch {
            city: city.name.to_string(),
            daily: archive.daily,
        }))
    }

    /// Fetches all cities one after another, dropping the ones that failed.
    pub async fn fetch_all(&self, cities: &[City]) -> Result<Vec<CityBatch>, Error> {
        let mut batches = vec![];
        for city in cities {
            if let Some(batch) = self.fetch_daily_mean(city).await? {
                batches.push(batch);
            }
        }
        Ok(batches)
    }
}
