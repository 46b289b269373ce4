//! Shared fixtures for unit tests: canned job feeds and a loopback stub of the
//! job board.

use async_trait::async_trait;
use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;

use crate::jobs::feed::{FetchError, JobFeed};
use crate::jobs::listing::RawJob;

/// Feed that always returns the same records.
pub struct StaticFeed(pub Vec<RawJob>);

#[async_trait]
impl JobFeed for StaticFeed {
    async fn fetch(&self) -> Result<Vec<RawJob>, FetchError> {
        Ok(self.0.clone())
    }
}

/// Feed that always fails as if the upstream were unavailable.
pub struct FailingFeed;

#[async_trait]
impl JobFeed for FailingFeed {
    async fn fetch(&self) -> Result<Vec<RawJob>, FetchError> {
        Err(FetchError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

/// Converts a JSON array of objects into raw job records.
pub fn raw_jobs(value: Value) -> Vec<RawJob> {
    serde_json::from_value(value).expect("fixture must be an array of objects")
}

/// Serves `body` with `status` on a random loopback port and returns the feed URL.
pub async fn serve_json(status: StatusCode, body: String) -> String {
    let app = Router::new().route(
        "/api/job-board-api",
        get(move || {
            let body = body.clone();
            async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/job-board-api")
}
