use corpusforge::application::ports::{FileLoader, FileLoaderError};
use corpusforge::application::services::TextNormalizer;
use corpusforge::domain::Document;
use corpusforge::infrastructure::text_processing::PdfAdapter;

use crate::helpers::{minimal_pdf, pdf_with_contents, write_file};

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_returns_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "sample.pdf", minimal_pdf(&["Hello World"]));

    let result = PdfAdapter::new().extract_text(&Document::new(path)).await;

    let text = result.unwrap();
    assert!(text.contains("Hello"), "unexpected text: {text:?}");
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_keeps_page_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "pages.pdf",
        minimal_pdf(&["Alpha", "Bravo", "Charlie"]),
    );

    let text = PdfAdapter::new()
        .extract_text(&Document::new(path))
        .await
        .unwrap();

    let alpha = text.find("Alpha").unwrap();
    let bravo = text.find("Bravo").unwrap();
    let charlie = text.find("Charlie").unwrap();
    assert!(alpha < bravo && bravo < charlie, "unexpected order: {text:?}");
}

#[tokio::test]
async fn given_bottom_line_drawn_first_when_extracting_then_reads_top_to_bottom() {
    let dir = tempfile::TempDir::new().unwrap();
    let content = "BT /F1 24 Tf 72 100 Td (Bottomline) Tj ET \
                   BT /F1 24 Tf 72 700 Td (Topline) Tj ET"
        .to_string();
    let path = write_file(dir.path(), "footer_first.pdf", pdf_with_contents(&[content]));

    let text = PdfAdapter::new()
        .extract_text(&Document::new(path))
        .await
        .unwrap();

    let top = text.find("Topline").unwrap();
    let bottom = text.find("Bottomline").unwrap();
    assert!(top < bottom, "unexpected order: {text:?}");
}

#[tokio::test]
async fn given_image_beside_text_when_extracting_then_only_text_survives() {
    let dir = tempfile::TempDir::new().unwrap();
    let content = "q 100 0 0 100 72 500 cm /Im1 Do Q \
                   BT /F1 24 Tf 72 700 Td (Caption) Tj ET"
        .to_string();
    let path = write_file(dir.path(), "figure.pdf", pdf_with_contents(&[content]));

    let raw = PdfAdapter::new()
        .extract_text(&Document::new(path))
        .await
        .unwrap();
    let normalized = TextNormalizer::default().normalize(&raw, true);

    assert_eq!(normalized.as_str(), "caption");
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "corrupt.pdf", b"not a pdf at all");

    let result = PdfAdapter::new().extract_text(&Document::new(path)).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_missing_file_when_extracting_pdf_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let document = Document::new(dir.path().join("absent.pdf"));

    let result = PdfAdapter::new().extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
