use std::sync::Arc;

use crate::config::Config;
use crate::jobs::feed::JobFeed;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream job board. Default: HttpJobFeed against `config.jobs_api_url`.
    pub job_feed: Arc<dyn JobFeed>,
}
