// Job matching: pulls the upstream feed and keeps the listings that mention
// any of the résumé's skills.

pub mod feed;
pub mod listing;

use tracing::{error, info};

use crate::outcome::Outcome;
use feed::JobFeed;
use listing::{filter_jobs, JobListing};

/// Fetches the feed and filters it by `skills`.
///
/// A failed fetch is a `Fallback` holding the single error sentinel. A
/// successful fetch with no matches is a `Value` holding the single
/// "no jobs found" sentinel.
pub async fn fetch_jobs(feed: &dyn JobFeed, skills: &[String]) -> Outcome<Vec<JobListing>> {
    let raw = match feed.fetch().await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Error fetching jobs: {e}");
            return Outcome::fallback(vec![JobListing::fetch_error()], e.to_string());
        }
    };

    let matched = filter_jobs(&raw, skills);
    info!(
        "Matched {} of {} listings against {} skills",
        matched.len(),
        raw.len(),
        skills.len()
    );

    if matched.is_empty() {
        Outcome::Value(vec![JobListing::no_jobs_found()])
    } else {
        Outcome::Value(matched)
    }
}
