mod cleaning_rule;
mod corpus;
mod document;
mod document_format;
mod extraction;
mod normalized_text;

pub use cleaning_rule::{CleaningRule, CleaningRuleError, CleaningRuleSet};
pub use corpus::{CategoryLabel, Corpus, CorpusRow, SentinelPolicy};
pub use document::Document;
pub use document_format::DocumentFormat;
pub use extraction::{Extraction, FILE_NOT_FOUND_MESSAGE, UNSUPPORTED_FORMAT_MESSAGE};
pub use normalized_text::NormalizedText;
