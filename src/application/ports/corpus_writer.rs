use async_trait::async_trait;

use crate::domain::Corpus;

/// Persists a finished corpus. Called once per build.
#[async_trait]
pub trait CorpusWriter: Send + Sync {
    async fn write(&self, corpus: &Corpus) -> Result<(), CorpusWriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusWriterError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization: {0}")]
    Serialization(String),
}
