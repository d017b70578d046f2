mod docx_adapter;
mod extractor_factory;
mod legacy_doc_adapter;
mod mock_file_loader;
mod pdf_adapter;
mod plain_text_adapter;

pub use docx_adapter::DocxAdapter;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use legacy_doc_adapter::{DEFAULT_CONVERTER, LegacyDocAdapter};
pub use mock_file_loader::MockFileLoader;
pub use pdf_adapter::{DEFAULT_EXTRACTION_TIMEOUT, PdfAdapter};
pub use plain_text_adapter::PlainTextAdapter;
