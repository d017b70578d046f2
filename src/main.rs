use std::path::PathBuf;
use std::sync::Arc;

use corpusforge::application::services::{
    CorpusBuilder, CorpusOptions, ExtractionService, TextNormalizer,
};
use corpusforge::infrastructure::observability::{TracingConfig, init_tracing};
use corpusforge::infrastructure::persistence::CsvCorpusWriter;
use corpusforge::infrastructure::text_processing::ExtractorFactory;
use corpusforge::presentation::{Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment)?;

    if let Some(root) = std::env::args_os().nth(1) {
        settings.corpus.input_root = PathBuf::from(root);
    }

    init_tracing(TracingConfig::new(environment, &settings.logging));

    let rules = settings.cleaning.to_rule_set()?;
    tracing::info!(rules = rules.len(), "Cleaning rules loaded");

    let loaders = ExtractorFactory::create(&settings.extraction)?;
    let extraction = Arc::new(ExtractionService::new(loaders, TextNormalizer::new(rules)));

    let output_path = std::env::current_dir()?.join(&settings.corpus.output_path);
    let writer = Arc::new(CsvCorpusWriter::new(output_path));

    let builder = CorpusBuilder::new(extraction, writer, CorpusOptions::from(&settings.corpus));
    let corpus = builder.build(&settings.corpus.input_root).await?;

    tracing::info!(
        rows = corpus.len(),
        root = %settings.corpus.input_root.display(),
        "Done"
    );

    Ok(())
}
