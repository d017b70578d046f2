use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::{StreamExt, stream};

use crate::application::ports::CorpusWriter;
use crate::domain::{CategoryLabel, Corpus, CorpusRow, Extraction, SentinelPolicy};

use super::extraction_service::ExtractionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    pub case_fold: bool,
    pub sentinel_policy: SentinelPolicy,
    /// Files extracted at once. Rows keep discovery order whatever the value.
    pub max_concurrent_extractions: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            case_fold: true,
            sentinel_policy: SentinelPolicy::Skip,
            max_concurrent_extractions: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_seen: usize,
    pub rows: usize,
    pub failed: usize,
    pub sentinels: usize,
    pub persisted: bool,
    pub rows_per_category: BTreeMap<String, usize>,
}

impl BuildSummary {
    fn record_row(&mut self, category: &CategoryLabel) {
        self.rows += 1;
        *self
            .rows_per_category
            .entry(category.as_str().to_string())
            .or_default() += 1;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusBuildError {
    #[error("cannot read corpus root {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
struct SourceFile {
    category: CategoryLabel,
    path: PathBuf,
}

/// Walks `root/<category>/<file>` and turns every readable file into a
/// `CorpusRow` labelled with its category directory.
pub struct CorpusBuilder<W>
where
    W: CorpusWriter + ?Sized,
{
    extraction: Arc<ExtractionService>,
    writer: Arc<W>,
    options: CorpusOptions,
}

impl<W> CorpusBuilder<W>
where
    W: CorpusWriter + ?Sized,
{
    pub fn new(
        extraction: Arc<ExtractionService>,
        writer: Arc<W>,
        options: CorpusOptions,
    ) -> Self {
        Self {
            extraction,
            writer,
            options,
        }
    }

    pub async fn build(&self, root: &Path) -> Result<Corpus, CorpusBuildError> {
        self.build_with_summary(root)
            .await
            .map(|(corpus, _summary)| corpus)
    }

    #[tracing::instrument(skip(self, root), fields(root = %root.display()))]
    pub async fn build_with_summary(
        &self,
        root: &Path,
    ) -> Result<(Corpus, BuildSummary), CorpusBuildError> {
        let sources = discover_sources(root).await?;
        tracing::info!(files = sources.len(), "Discovered corpus files");

        let extraction = self.extraction.as_ref();
        let case_fold = self.options.case_fold;
        let mut outcomes = stream::iter(sources)
            .map(move |source| async move {
                let outcome = extraction.extract(&source.path, case_fold).await;
                (source, outcome)
            })
            .buffered(self.options.max_concurrent_extractions.max(1));

        let mut corpus = Corpus::new();
        let mut summary = BuildSummary::default();

        while let Some((source, outcome)) = outcomes.next().await {
            summary.files_seen += 1;
            match outcome {
                Ok(Extraction::Text(text)) => {
                    tracing::debug!(
                        path = %source.path.display(),
                        category = %source.category,
                        "Writing row"
                    );
                    summary.record_row(&source.category);
                    corpus.push(CorpusRow::new(text.into_inner(), source.category));
                }
                Ok(sentinel) => {
                    summary.sentinels += 1;
                    match self.options.sentinel_policy {
                        SentinelPolicy::Skip => {
                            tracing::warn!(
                                path = %source.path.display(),
                                reason = sentinel.as_str(),
                                "Skipping file"
                            );
                        }
                        SentinelPolicy::Record => {
                            summary.record_row(&source.category);
                            corpus.push(CorpusRow::new(sentinel.into_text(), source.category));
                        }
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(path = %source.path.display(), error = %e, "Skipping file");
                }
            }
        }

        match self.writer.write(&corpus).await {
            Ok(()) => summary.persisted = true,
            Err(e) => tracing::error!(error = %e, "Failed to persist corpus"),
        }

        tracing::info!(
            files = summary.files_seen,
            rows = summary.rows,
            failed = summary.failed,
            sentinels = summary.sentinels,
            persisted = summary.persisted,
            categories = ?summary.rows_per_category,
            "Corpus build complete"
        );

        Ok((corpus, summary))
    }
}

async fn discover_sources(root: &Path) -> Result<Vec<SourceFile>, CorpusBuildError> {
    let entries = sorted_entries(root)
        .await
        .map_err(|source| CorpusBuildError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

    let mut sources = Vec::new();
    for category_dir in entries {
        if !is_dir(&category_dir).await {
            continue;
        }
        let Some(name) = category_dir.file_name() else {
            continue;
        };
        let category = CategoryLabel::new(name.to_string_lossy());

        let files = match sorted_entries(&category_dir).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    "Cannot read category directory"
                );
                continue;
            }
        };

        for path in files {
            if is_dir(&path).await {
                continue;
            }
            sources.push(SourceFile {
                category: category.clone(),
                path,
            });
        }
    }

    Ok(sources)
}

async fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
