use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors raised while retrieving the upstream page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered, but not with a 2xx
    #[error("upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// One network retrieval of a resource, no retries.
///
/// Implementations never consult or populate a cache; that is the job of
/// [`TtlCache`](crate::models::cache::TtlCache).
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replays queued outcomes in order and counts calls.
    #[derive(Default)]
    pub struct ScriptedFetcher {
        outcomes: Mutex<VecDeque<Result<Bytes, FetchError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok(self, body: &str) -> Self {
            self.outcomes
                .lock()
                .unwrap()
                .push_back(Ok(Bytes::from(body.to_string())));
            self
        }

        pub fn fail(self, status: u16) -> Self {
            self.outcomes.lock().unwrap().push_back(Err(FetchError::Status {
                status,
                url: "http://upstream.test/".to_string(),
            }));
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self, _url: &str) -> Result<Bytes, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("fetch called more often than scripted")
        }
    }
}
