use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use pdf_oxide::converters::ConversionOptions;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts text page by page, top-to-bottom and left-to-right within each
/// page. Tagged PDFs follow their structure tree. Images are skipped.
///
/// A blocking parse cannot be interrupted mid-page, so on timeout the worker
/// is told to stop at the next page boundary.
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn conversion_options() -> ConversionOptions {
        ConversionOptions {
            detect_headings: false,
            include_images: false,
            embed_images: false,
            ..ConversionOptions::default()
        }
    }

    fn extract_pages(path: &Path, cancelled: &AtomicBool) -> Result<Vec<String>, FileLoaderError> {
        if cancelled.load(Ordering::Relaxed) {
            return Err(cancelled_error());
        }

        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        if page_count == 0 {
            return Err(FileLoaderError::ExtractionFailed("PDF has no pages".to_string()));
        }

        let options = Self::conversion_options();
        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            if cancelled.load(Ordering::Relaxed) {
                return Err(cancelled_error());
            }

            let text = doc.to_plain_text(page_index, &options).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

fn cancelled_error() -> FileLoaderError {
    FileLoaderError::ExtractionFailed("PDF extraction cancelled".to_string())
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, document), fields(filename = %document.file_name()))]
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let path = document.path.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&path, &worker_cancelled)),
        )
        .await
        .map_err(|_| {
            cancelled.store(true, Ordering::Relaxed);
            FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string())
        })?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(page_count = pages.len(), "PDF text extraction complete");

        // Page breaks must survive as whitespace or the last word of one
        // page fuses with the first word of the next.
        Ok(pages.join("\n"))
    }
}
