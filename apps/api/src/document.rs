//! Document extraction collaborator — resume URL in, plain text out.
//!
//! The resume is fetched over HTTP, spooled to a temp file, and run through
//! the PDF text extractor on the blocking pool. Errors split into the two
//! caller-visible failure classes: `Fetch` (source unreachable or non-2xx)
//! and `Parse` (document malformed). The scoring core never sees either —
//! it assumes text has already been obtained.

use std::io::Write;

use anyhow::Context;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::AppError;

/// Downloads the resume at `url` and extracts its text content as one blob,
/// concatenated across pages with no structural markup retained.
pub async fn fetch_and_extract(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch(format!("source returned status {status}")));
    }

    let body: Bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    debug!("fetched resume document ({} bytes)", body.len());

    // pdf-extract is CPU-bound and synchronous — keep it off the async
    // runtime threads.
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&body))
        .await
        .context("extraction task panicked")??;

    Ok(text)
}

fn extract_pdf_text(body: &[u8]) -> Result<String, AppError> {
    let spool = NamedTempFile::new()
        .and_then(|mut file| file.write_all(body).map(|_| file))
        .map_err(|e| AppError::Parse(format!("failed to spool document: {e}")))?;

    pdf_extract::extract_text(spool.path()).map_err(|e| AppError::Parse(e.to_string()))
}
