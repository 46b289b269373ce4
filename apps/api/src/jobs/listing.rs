//! Job listings — the shape returned to clients, and the filter that builds it
//! from raw upstream records.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job object exactly as the upstream feed returned it.
pub type RawJob = Map<String, Value>;

pub const DESCRIPTION_WORD_LIMIT: usize = 50;
const ELLIPSIS: &str = "...";

pub const NO_JOBS_FOUND_TITLE: &str = "🚀 NO JOBS FOUND 🚀";
pub const FETCH_ERROR_TITLE: &str = "❌ ERROR FETCHING JOBS ❌";

/// A listing as sent to the client. Sentinel listings only carry
/// `title`, `description` and `url`; the optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stipend: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    pub url: String,
}

impl JobListing {
    /// Returned alone when the feed had nothing matching the résumé's skills.
    pub fn no_jobs_found() -> Self {
        Self::sentinel(
            NO_JOBS_FOUND_TITLE,
            "Sorry, no matching jobs were found. Please try updating your resume or skills.",
        )
    }

    /// Returned alone when the feed could not be fetched or decoded.
    pub fn fetch_error() -> Self {
        Self::sentinel(
            FETCH_ERROR_TITLE,
            "An error occurred while fetching job data.",
        )
    }

    fn sentinel(title: &str, description: &str) -> Self {
        JobListing {
            title: title.to_string(),
            description: description.to_string(),
            requirements: None,
            last_date: None,
            salary: None,
            stipend: None,
            qualifications: None,
            url: "#".to_string(),
        }
    }

    /// Builds the client-facing listing from a raw upstream job, stripping
    /// HTML and filling defaults for missing fields.
    pub fn from_raw(job: &RawJob) -> Self {
        let description = text_field(job, "description")
            .map(|d| shorten_text(&strip_html(d), DESCRIPTION_WORD_LIMIT))
            .unwrap_or_else(|| "No description provided.".to_string());

        JobListing {
            title: text_field(job, "title").unwrap_or("N/A").to_string(),
            description,
            requirements: Some(strip_html(
                &display_field(job, "requirements").unwrap_or_else(|| "Not specified.".into()),
            )),
            last_date: Some(passthrough_field(job, "last_date", "Not mentioned")),
            salary: Some(passthrough_field(job, "salary", "Not disclosed")),
            stipend: Some(passthrough_field(job, "stipend", "N/A")),
            qualifications: Some(strip_html(
                &display_field(job, "qualifications").unwrap_or_else(|| "Not specified".into()),
            )),
            url: display_field(job, "url").unwrap_or_else(|| "#".into()),
        }
    }
}

/// Keeps the raw jobs whose title or description mentions at least one skill
/// (case-insensitive substring), in feed order.
pub fn filter_jobs(jobs: &[RawJob], skills: &[String]) -> Vec<JobListing> {
    let skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    jobs.iter()
        .filter(|job| {
            let title = text_field(job, "title").unwrap_or_default().to_lowercase();
            let description = text_field(job, "description")
                .unwrap_or_default()
                .to_lowercase();
            skills
                .iter()
                .any(|skill| title.contains(skill.as_str()) || description.contains(skill.as_str()))
        })
        .map(JobListing::from_raw)
        .collect()
}

fn html_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"))
}

/// Removes every `<...>` tag and trims. Entities are left as-is.
pub fn strip_html(text: &str) -> String {
    html_tag_regex().replace_all(text, "").trim().to_string()
}

/// Keeps the first `word_limit` whitespace-delimited words, joined by single
/// spaces, and appends `...` if anything was cut.
pub fn shorten_text(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut shortened = words
        .iter()
        .take(word_limit)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > word_limit {
        shortened.push_str(ELLIPSIS);
    }
    shortened
}

/// String-valued field; `null` and non-strings count as missing.
fn text_field<'a>(job: &'a RawJob, key: &str) -> Option<&'a str> {
    job.get(key).and_then(|v| v.as_str())
}

/// Upstream value untouched, whatever its JSON type; `default` when missing or `null`.
fn passthrough_field(job: &RawJob, key: &str, default: &str) -> Value {
    match job.get(key) {
        None | Some(Value::Null) => Value::String(default.to_string()),
        Some(value) => value.clone(),
    }
}

/// Text field; strings as-is, other non-null values as JSON text.
fn display_field(job: &RawJob, key: &str) -> Option<String> {
    match job.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
