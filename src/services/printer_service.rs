use crate::api::fetcher::{FetchError, Fetcher};
use crate::models::cache::TtlCache;
use crate::models::printer::PrinterReport;
use crate::utils::parser::extract_rows;
use crate::utils::readiness::annotate;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Anything that stops a request from producing a report.
///
/// Both variants surface to callers as the same server error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("The request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("The request failed: the printer page had nothing to parse")]
    ParseAbsent,
}

/// Cache, extract and classify: one report per request.
pub struct PrinterService {
    url: String,
    cache: TtlCache,
    fetcher: Arc<dyn Fetcher>,
}

impl PrinterService {
    pub fn new(url: impl Into<String>, cache: TtlCache, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            url: url.into(),
            cache,
            fetcher,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn handle_request(&self) -> Result<PrinterReport, ServiceError> {
        debug!("Fetching printer status from {}", self.url);

        let cached = self
            .cache
            .get_or_fetch(&self.url, self.fetcher.as_ref())
            .await
            .inspect_err(|e| error!("Failed to fetch {}: {}", self.url, e))?;

        let rows = extract_rows(&cached.body).ok_or_else(|| {
            error!("No printer data in response from {}", self.url);
            ServiceError::ParseAbsent
        })?;

        let printers: Vec<_> = rows.into_iter().map(annotate).collect();
        debug!("Classified {} printers", printers.len());

        Ok(PrinterReport {
            printers,
            remaining: cached.remaining,
        })
    }
}
