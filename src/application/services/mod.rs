mod corpus_builder;
mod extraction_service;
mod text_normalizer;

pub use corpus_builder::{BuildSummary, CorpusBuildError, CorpusBuilder, CorpusOptions};
pub use extraction_service::{ExtractionService, FormatLoaders};
pub use text_normalizer::TextNormalizer;
