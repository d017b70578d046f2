use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

use super::text_normalizer::TextNormalizer;

/// One loader per supported format.
#[derive(Clone)]
pub struct FormatLoaders {
    pub pdf: Arc<dyn FileLoader>,
    pub docx: Arc<dyn FileLoader>,
    pub doc: Arc<dyn FileLoader>,
    pub txt: Arc<dyn FileLoader>,
}

impl FormatLoaders {
    pub fn get(&self, format: DocumentFormat) -> &dyn FileLoader {
        match format {
            DocumentFormat::Pdf => self.pdf.as_ref(),
            DocumentFormat::Docx => self.docx.as_ref(),
            DocumentFormat::Doc => self.doc.as_ref(),
            DocumentFormat::Txt => self.txt.as_ref(),
        }
    }
}

/// Maps a path to its format loader and normalizes what comes back.
pub struct ExtractionService {
    loaders: FormatLoaders,
    normalizer: TextNormalizer,
}

impl ExtractionService {
    pub fn new(loaders: FormatLoaders, normalizer: TextNormalizer) -> Self {
        Self {
            loaders,
            normalizer,
        }
    }

    /// Missing files and unknown extensions come back as sentinel
    /// `Extraction`s; only loader failures are errors.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn extract(
        &self,
        path: &Path,
        case_fold: bool,
    ) -> Result<Extraction, FileLoaderError> {
        let is_file = tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            tracing::debug!("File not found");
            return Ok(Extraction::FileNotFound);
        }

        let document = Document::new(path);
        let Some(format) = document.format() else {
            tracing::debug!(extension = ?document.extension, "Unsupported format");
            return Ok(Extraction::UnsupportedFormat);
        };

        let raw = self.loaders.get(format).extract_text(&document).await?;
        let text = self.normalizer.normalize(&raw, case_fold);
        tracing::debug!(%format, chars = text.as_str().len(), "Extracted text");

        Ok(Extraction::Text(text))
    }
}
