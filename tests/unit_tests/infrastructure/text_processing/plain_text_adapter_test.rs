use corpusforge::application::ports::{FileLoader, FileLoaderError};
use corpusforge::domain::Document;
use corpusforge::infrastructure::text_processing::PlainTextAdapter;

use crate::helpers::write_file;

#[tokio::test]
async fn given_valid_utf8_file_when_extracting_then_returns_contents() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "readme.txt", "Hello, this is plain text.");

    let result = PlainTextAdapter.extract_text(&Document::new(path)).await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_invalid_utf8_file_when_extracting_then_decodes_lossily() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "broken.txt", b"caf\xe9 ok\xff");

    let result = PlainTextAdapter.extract_text(&Document::new(path)).await;

    assert_eq!(result.unwrap(), "caf\u{fffd} ok\u{fffd}");
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let document = Document::new(dir.path().join("absent.txt"));

    let result = PlainTextAdapter.extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
