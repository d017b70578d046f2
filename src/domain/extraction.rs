use super::normalized_text::NormalizedText;

pub const FILE_NOT_FOUND_MESSAGE: &str = "Make sure uploaded file exist";
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Could not process files with this extension";

/// Result of dispatching a single path.
///
/// `FileNotFound` and `UnsupportedFormat` are recognised failures carried as
/// data rather than errors; their text never goes through case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(NormalizedText),
    FileNotFound,
    UnsupportedFormat,
}

impl Extraction {
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text.as_str(),
            Self::FileNotFound => FILE_NOT_FOUND_MESSAGE,
            Self::UnsupportedFormat => UNSUPPORTED_FORMAT_MESSAGE,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text.into_inner(),
            sentinel => sentinel.as_str().to_string(),
        }
    }
}
