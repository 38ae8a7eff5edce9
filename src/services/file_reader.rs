//! Reading transcripts from disk

use crate::utils::error::ServiceError;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use tracing::{error, info, warn};

/// Text file reader producing classified errors
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a UTF-8 text file
    ///
    /// An empty file is returned as-is with a warning.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<String, ServiceError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                info!(file_path = %shown, "Read file");
                if content.trim().is_empty() {
                    warn!(file_path = %shown, "File is empty");
                }
                Ok(content)
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                error!(file_path = %shown, "File does not exist");
                Err(ServiceError::file_read(&shown).with_detail("error", "file does not exist"))
            }
            Err(e) => {
                error!(file_path = %shown, error = %e, "Failed to read file");
                Err(ServiceError::file_read(&shown)
                    .with_detail("error", format!("failed to read file: {}", e)))
            }
        }
    }

    /// Non-empty trimmed lines of a text file
    pub async fn read_lines(&self, path: impl AsRef<Path>) -> Result<Vec<String>, ServiceError> {
        let content = self.read(path).await?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
