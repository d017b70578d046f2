use std::sync::Arc;

use async_trait::async_trait;
use corpusforge::application::ports::{FileLoader, FileLoaderError};
use corpusforge::application::services::{ExtractionService, FormatLoaders, TextNormalizer};
use corpusforge::domain::{
    CleaningRuleSet, Document, Extraction, FILE_NOT_FOUND_MESSAGE, UNSUPPORTED_FORMAT_MESSAGE,
};

use crate::helpers::{mock_extraction_service, write_file};

struct StaticLoader(&'static str);

#[async_trait]
impl FileLoader for StaticLoader {
    async fn extract_text(&self, _document: &Document) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

struct FailingLoader;

#[async_trait]
impl FileLoader for FailingLoader {
    async fn extract_text(&self, _document: &Document) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ConverterFailed("antiword not found".to_string()))
    }
}

fn routing_service() -> ExtractionService {
    ExtractionService::new(
        FormatLoaders {
            pdf: Arc::new(StaticLoader("PDF loader")),
            docx: Arc::new(StaticLoader("DOCX loader")),
            doc: Arc::new(StaticLoader("DOC loader")),
            txt: Arc::new(StaticLoader("TXT loader")),
        },
        TextNormalizer::new(CleaningRuleSet::default()),
    )
}

#[tokio::test]
async fn given_each_supported_extension_when_extracting_then_routes_to_its_loader() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = routing_service();

    for (name, expected) in [
        ("cv.pdf", "pdf loader"),
        ("cv.docx", "docx loader"),
        ("cv.doc", "doc loader"),
        ("cv.txt", "txt loader"),
    ] {
        let path = write_file(dir.path(), name, b"ignored");

        let result = service.extract(&path, true).await.unwrap();

        assert_eq!(result.as_str(), expected, "routing for {name}");
    }
}

#[tokio::test]
async fn given_text_file_when_extracting_then_returns_normalized_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "cv.txt", "The Rust Engineer,\n  building a compiler.\n");

    let result = mock_extraction_service().extract(&path, true).await.unwrap();

    assert_eq!(result.as_str(), "rust engineer building compiler");
    assert!(!result.is_sentinel());
}

#[tokio::test]
async fn given_missing_path_when_extracting_then_returns_file_not_found_sentinel() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ghost.pdf");

    let result = mock_extraction_service().extract(&path, true).await.unwrap();

    assert_eq!(result, Extraction::FileNotFound);
    assert_eq!(result.as_str(), FILE_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn given_directory_path_when_extracting_then_returns_file_not_found_sentinel() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = mock_extraction_service().extract(dir.path(), true).await.unwrap();

    assert_eq!(result, Extraction::FileNotFound);
}

#[tokio::test]
async fn given_unregistered_extension_when_extracting_then_returns_unsupported_sentinel_unfolded() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "cv.rtf", "{\\rtf1 Hello}");
    let service = mock_extraction_service();

    let folded = service.extract(&path, true).await.unwrap();
    let unfolded = service.extract(&path, false).await.unwrap();

    assert_eq!(folded, Extraction::UnsupportedFormat);
    assert_eq!(folded.as_str(), UNSUPPORTED_FORMAT_MESSAGE);
    assert_eq!(unfolded.as_str(), UNSUPPORTED_FORMAT_MESSAGE);
}

#[tokio::test]
async fn given_uppercase_extension_when_extracting_then_returns_unsupported_sentinel() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "CV.TXT", "plain words");

    let result = mock_extraction_service().extract(&path, true).await.unwrap();

    assert_eq!(result, Extraction::UnsupportedFormat);
}

#[tokio::test]
async fn given_file_without_extension_when_extracting_then_returns_unsupported_sentinel() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "Makefile", "all:");

    let result = mock_extraction_service().extract(&path, true).await.unwrap();

    assert_eq!(result, Extraction::UnsupportedFormat);
}

#[tokio::test]
async fn given_failing_loader_when_extracting_then_propagates_loader_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "old.doc", b"\xd0\xcf\x11\xe0");
    let service = ExtractionService::new(
        FormatLoaders {
            pdf: Arc::new(StaticLoader("unused")),
            docx: Arc::new(StaticLoader("unused")),
            doc: Arc::new(FailingLoader),
            txt: Arc::new(StaticLoader("unused")),
        },
        TextNormalizer::default(),
    );

    let result = service.extract(&path, true).await;

    assert!(matches!(result, Err(FileLoaderError::ConverterFailed(_))));
}
