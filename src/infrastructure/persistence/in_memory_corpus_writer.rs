use std::sync::Mutex;

use crate::application::ports::{CorpusWriter, CorpusWriterError};
use crate::domain::Corpus;

/// Keeps every corpus it is given. Used where no file should be written.
#[derive(Default)]
pub struct InMemoryCorpusWriter {
    written: Mutex<Vec<Corpus>>,
}

impl InMemoryCorpusWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<Corpus> {
        self.written
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CorpusWriter for InMemoryCorpusWriter {
    async fn write(&self, corpus: &Corpus) -> Result<(), CorpusWriterError> {
        self.written
            .lock()
            .map_err(|e| CorpusWriterError::Serialization(e.to_string()))?
            .push(corpus.clone());
        Ok(())
    }
}
