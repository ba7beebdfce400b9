use std::path::PathBuf;

use crate::source::{GlossarySource, SourceError};

/// Reads the CSV document from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl GlossarySource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
