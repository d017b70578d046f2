use std::sync::Arc;
use std::time::Duration;

use crate::application::services::FormatLoaders;
use crate::presentation::config::ExtractionSettings;

use super::docx_adapter::DocxAdapter;
use super::legacy_doc_adapter::LegacyDocAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("doc_converter must name a command")]
    MissingConverterCommand,
    #[error("pdf_timeout_secs must be greater than zero")]
    InvalidPdfTimeout,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(settings: &ExtractionSettings) -> Result<FormatLoaders, ExtractorFactoryError> {
        let converter = settings.doc_converter.trim();
        if converter.is_empty() {
            return Err(ExtractorFactoryError::MissingConverterCommand);
        }
        if settings.pdf_timeout_secs == 0 {
            return Err(ExtractorFactoryError::InvalidPdfTimeout);
        }

        let doc_timeout = settings
            .doc_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        tracing::info!(
            converter,
            pdf_timeout_secs = settings.pdf_timeout_secs,
            doc_timeout_secs = ?settings.doc_timeout_secs,
            "Creating format loaders"
        );

        Ok(FormatLoaders {
            pdf: Arc::new(PdfAdapter::with_timeout(Duration::from_secs(
                settings.pdf_timeout_secs,
            ))),
            docx: Arc::new(DocxAdapter::new()),
            doc: Arc::new(
                LegacyDocAdapter::new(converter)
                    .with_args(settings.doc_converter_args.clone())
                    .with_timeout(doc_timeout),
            ),
            txt: Arc::new(PlainTextAdapter),
        })
    }
}
