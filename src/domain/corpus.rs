use std::fmt;

use serde::Deserialize;

/// Classification tag, taken from the name of a file's category directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub text: String,
    pub category: CategoryLabel,
}

impl CorpusRow {
    pub fn new(text: impl Into<String>, category: CategoryLabel) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Rows in directory-traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: CorpusRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusRow> {
        self.rows.iter()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.category.as_str()).collect()
    }
}

impl From<Vec<CorpusRow>> for Corpus {
    fn from(rows: Vec<CorpusRow>) -> Self {
        Self { rows }
    }
}

/// What the corpus builder does with `FileNotFound` / `UnsupportedFormat`
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentinelPolicy {
    /// Leave the file out of the corpus.
    #[default]
    Skip,
    /// Store the sentinel message as the row text.
    Record,
}
