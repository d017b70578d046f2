use std::fs::File;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use quick_xml::Reader as XmlReader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

const BODY_PART: &str = "word/document.xml";

/// Reads the body text of a DOCX package. Only `word/document.xml` is
/// consulted, so images, headers and other parts never reach the output.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_body(path: &Path) -> Result<String, FileLoaderError> {
        let file = File::open(path).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open {}: {e}", path.display()))
        })?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("invalid DOCX package: {e}")))?;
        let mut entry = archive.by_name(BODY_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {BODY_PART}: {e}"))
        })?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {BODY_PART}: {e}"))
        })?;

        collect_body_text(&xml)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, document), fields(filename = %document.file_name()))]
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let path = document.path.clone();
        tokio::task::spawn_blocking(move || Self::read_body(&path))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
    }
}

fn collect_body_text(xml: &str) -> Result<String, FileLoaderError> {
    let mut reader = XmlReader::from_str(xml);
    reader.trim_text(false);

    let mut text = String::with_capacity(xml.len() / 4);
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let unescaped = t.unescape().map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("malformed {BODY_PART}: {e}"))
                })?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "malformed {BODY_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(text)
}
