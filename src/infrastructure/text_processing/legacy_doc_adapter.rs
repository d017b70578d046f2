use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

pub const DEFAULT_CONVERTER: &str = "antiword";

/// Runs an external `.doc`-to-text converter and reads its stdout.
///
/// The document path is appended after `args`. Without a timeout a hung
/// converter blocks the caller indefinitely.
pub struct LegacyDocAdapter {
    command: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Default for LegacyDocAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl LegacyDocAdapter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FileLoader for LegacyDocAdapter {
    #[tracing::instrument(skip(self, document), fields(filename = %document.file_name()))]
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .arg(&document.path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    FileLoaderError::ConverterFailed(format!(
                        "{} timed out after {}ms",
                        self.command,
                        limit.as_millis()
                    ))
                })?,
            None => command.output().await,
        }
        .map_err(|e| {
            FileLoaderError::ConverterFailed(format!("failed to run {}: {e}", self.command))
        })?;

        tracing::debug!(
            converter = %self.command,
            status = %output.status,
            bytes = output.stdout.len(),
            "Converter finished"
        );

        if !output.status.success() {
            return Err(FileLoaderError::ConverterFailed(format!(
                "{} exited with {}",
                self.command, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
