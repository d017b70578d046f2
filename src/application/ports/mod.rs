mod corpus_writer;
mod file_loader;

pub use corpus_writer::{CorpusWriter, CorpusWriterError};
pub use file_loader::{FileLoader, FileLoaderError};
