use log::info;
use reqwest::Client;
use url::Url;

use crate::error::{BuildLensError, Result};

pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("BuildLens/0.2.0")
            .build()
            .map_err(|e| BuildLensError::Source(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> Result<String> {
        info!("Fetching build history from {url}");

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(BuildLensError::Source(format!(
                "'{url}' answered with status {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
