use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{CorpusWriter, CorpusWriterError};
use crate::domain::Corpus;

pub const DEFAULT_OUTPUT_PATH: &str = "data/ResumeJobData.csv";

/// Writes the corpus as `,Data,Category` with a zero-based row index,
/// replacing any previous file.
pub struct CsvCorpusWriter {
    output_path: PathBuf,
}

impl CsvCorpusWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    fn encode(corpus: &Corpus) -> Result<Vec<u8>, CorpusWriterError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["", "Data", "Category"])
            .map_err(|e| CorpusWriterError::Serialization(e.to_string()))?;

        for (index, row) in corpus.iter().enumerate() {
            let index = index.to_string();
            writer
                .write_record([index.as_str(), row.text.as_str(), row.category.as_str()])
                .map_err(|e| CorpusWriterError::Serialization(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| CorpusWriterError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl CorpusWriter for CsvCorpusWriter {
    async fn write(&self, corpus: &Corpus) -> Result<(), CorpusWriterError> {
        let bytes = Self::encode(corpus)?;

        if let Some(parent) = self
            .output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.output_path, bytes).await?;

        tracing::info!(
            path = %self.output_path.display(),
            rows = corpus.len(),
            "Corpus written"
        );
        Ok(())
    }
}
