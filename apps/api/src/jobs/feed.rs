//! Upstream job feed — the only place that talks to the job board.
//!
//! `AppState` holds an `Arc<dyn JobFeed>`; production wires in `HttpJobFeed`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::jobs::listing::RawJob;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job feed returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decodes the job board envelope. The body must be a JSON object; a missing
/// `data` key means no listings. Only the first page is read.
fn decode_feed(body: &str) -> Result<Vec<RawJob>, FetchError> {
    let mut envelope: Map<String, Value> = serde_json::from_str(body)?;
    match envelope.remove("data") {
        None => Ok(Vec::new()),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}

#[async_trait]
pub trait JobFeed: Send + Sync {
    /// Fetches the current set of raw job records.
    async fn fetch(&self) -> Result<Vec<RawJob>, FetchError>;
}

/// Job feed backed by a single unauthenticated GET. No retries.
#[derive(Clone)]
pub struct HttpJobFeed {
    client: Client,
    url: String,
}

impl HttpJobFeed {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobFeed for HttpJobFeed {
    async fn fetch(&self) -> Result<Vec<RawJob>, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let jobs = decode_feed(&body)?;
        debug!("Job feed returned {} listings", jobs.len());

        Ok(jobs)
    }
}
