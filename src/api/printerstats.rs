use crate::api::fetcher::{FetchError, Fetcher};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_URL: &str = "https://clusters.andrew.cmu.edu/printerstats/";

/// Fetches the printer statistics page over HTTPS.
#[derive(Clone)]
pub struct PrinterStatsApi {
    client: Client,
}

impl PrinterStatsApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for PrinterStatsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for PrinterStatsApi {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        debug!("Sending request to {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
