use async_trait::async_trait;

use crate::domain::Document;

/// Reads the raw, not yet normalized text of one document.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("converter failed: {0}")]
    ConverterFailed(String),
}
