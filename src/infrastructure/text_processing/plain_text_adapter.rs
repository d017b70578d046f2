use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Reads a text file, decoding invalid UTF-8 lossily instead of failing.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let data = tokio::fs::read(&document.path).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!(
                "failed to read {}: {e}",
                document.path.display()
            ))
        })?;

        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
