//! Plain-text extraction from stored résumé files, page by page.
//!
//! PDFs go through `pdf-extract`; anything else is read as a single plain-text
//! page. Failures never reach the caller: they come back as an empty-string
//! `Outcome::Fallback` so parsing always has something to work on.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, error};

use crate::outcome::Outcome;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Extraction task panicked: {0}")]
    Panicked(String),
}

/// Extracts the text of every page of the document at `path`, in order,
/// each page followed by a newline.
pub async fn extract_text(path: &Path) -> Outcome<String> {
    let owned = path.to_path_buf();
    // pdf-extract is synchronous and may panic on malformed input.
    let result = tokio::task::spawn_blocking(move || read_document(&owned))
        .await
        .unwrap_or_else(|e| Err(ExtractError::Panicked(e.to_string())));

    match result {
        Ok(text) => {
            debug!("Extracted {} chars from {}", text.len(), path.display());
            Outcome::Value(text)
        }
        Err(e) => {
            error!("Error extracting text from {}: {e}", path.display());
            Outcome::fallback(String::new(), e.to_string())
        }
    }
}

fn read_document(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;

    let pages = if bytes.starts_with(PDF_MAGIC) {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?
    } else {
        vec![String::from_utf8_lossy(&bytes).into_owned()]
    };

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
