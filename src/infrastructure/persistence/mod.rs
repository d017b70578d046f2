mod csv_corpus_writer;
mod in_memory_corpus_writer;

pub use csv_corpus_writer::{CsvCorpusWriter, DEFAULT_OUTPUT_PATH};
pub use in_memory_corpus_writer::InMemoryCorpusWriter;
