use std::path::{Path, PathBuf};

use super::document_format::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub extension: Option<String>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        Self { path, extension }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        self.extension
            .as_deref()
            .and_then(DocumentFormat::from_extension)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
