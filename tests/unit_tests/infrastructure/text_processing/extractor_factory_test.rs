use corpusforge::infrastructure::text_processing::{ExtractorFactory, ExtractorFactoryError};
use corpusforge::presentation::config::ExtractionSettings;

#[test]
fn given_default_settings_when_creating_then_returns_loaders() {
    let result = ExtractorFactory::create(&ExtractionSettings::default());

    assert!(result.is_ok());
}

#[test]
fn given_blank_converter_when_creating_then_returns_missing_converter_error() {
    let settings = ExtractionSettings {
        doc_converter: "   ".to_string(),
        ..ExtractionSettings::default()
    };

    let result = ExtractorFactory::create(&settings);

    assert!(matches!(
        result,
        Err(ExtractorFactoryError::MissingConverterCommand)
    ));
}

#[test]
fn given_zero_pdf_timeout_when_creating_then_returns_invalid_timeout_error() {
    let settings = ExtractionSettings {
        pdf_timeout_secs: 0,
        ..ExtractionSettings::default()
    };

    let result = ExtractorFactory::create(&settings);

    assert!(matches!(result, Err(ExtractorFactoryError::InvalidPdfTimeout)));
}
