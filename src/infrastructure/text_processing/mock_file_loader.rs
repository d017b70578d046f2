use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Treats every file as strict UTF-8 text regardless of its format.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let data = tokio::fs::read(&document.path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        String::from_utf8(data).map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
