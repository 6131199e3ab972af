//! PDF text extraction, page by page.
//!
//! Pages are read in order; pages without recoverable text are dropped and the
//! rest are joined with a newline. No OCR: a scanned resume yields "".

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF: {0}")]
    PdfParsing(String),

    #[error("PDF extraction aborted: {0}")]
    Aborted(String),
}

/// Extracts the text of every page of the PDF at `path`.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractionError> {
    let pdf_bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    let page_count = pages.len();
    let text = join_page_texts(pages);
    if text.is_empty() {
        warn!("No text recovered from {page_count} page(s); document may be scanned");
    } else {
        debug!("Extracted {} chars from {page_count} page(s)", text.len());
    }
    Ok(text)
}

/// Writes an upload to a transient `.pdf` file and extracts it on the blocking
/// pool. The transient file is removed when this returns, on every path.
pub async fn extract_upload(data: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || {
        let mut transient = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile()?;
        transient.write_all(&data)?;
        transient.flush()?;
        extract_text_from_pdf(transient.path())
    })
    .await
    .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}

fn join_page_texts(pages: Vec<String>) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
