//! Axum route handler for résumé uploads.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jobs::fetch_jobs;
use crate::jobs::listing::JobListing;
use crate::resume::extractor::extract_text;
use crate::resume::parser::{parse_resume, ResumeRecord};
use crate::state::AppState;

/// Name of the multipart field carrying the résumé.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub resume_data: ResumeRecord,
    pub job_data: Vec<JobListing>,
}

/// POST /upload-resume/
///
/// Stores the uploaded file, extracts and parses it, and returns the parsed
/// résumé with the job listings matching its skills.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, content) = read_file_field(&mut multipart).await?;

    let path = store_upload(&state.config.storage_dir, &filename, &content).await?;
    info!("File {filename} uploaded successfully.");

    let extraction = extract_text(&path).await;
    if let Some(reason) = extraction.reason() {
        warn!("Parsing {filename} with empty text: {reason}");
    }
    let resume_data = parse_resume(extraction.value());

    let jobs = fetch_jobs(state.job_feed.as_ref(), &resume_data.skills).await;
    if jobs.is_fallback() {
        warn!(
            "Returning error placeholder for {filename}: {}",
            jobs.reason().unwrap_or("unknown")
        );
    }

    Ok(Json(UploadResponse {
        filename,
        resume_data,
        job_data: jobs.into_value(),
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("File part has no filename".to_string()))?;
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        return Ok((filename, content));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

/// Writes `content` to `<dir>/<filename>`, creating `dir` if needed and
/// overwriting any existing file. The filename is used verbatim.
async fn store_upload(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = upload_path(dir, filename);
    tokio::fs::write(&path, content).await?;
    Ok(path)
}

// Plain concatenation: an absolute filename stays under `dir` instead of
// replacing it the way `Path::join` would.
fn upload_path(dir: &Path, filename: &str) -> PathBuf {
    let mut path = OsString::from(dir.as_os_str());
    path.push("/");
    path.push(filename);
    PathBuf::from(path)
}
