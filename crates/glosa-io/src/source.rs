use glosa_config::source::SourceConfig;

use crate::file::FileSource;
use crate::http::HttpSource;

/// Provider of the raw CSV document.
#[async_trait::async_trait]
pub trait GlossarySource: Send + Sync {
    /// Fetch the whole document
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A local file when `path` is configured, the URL otherwise.
pub fn source_from_config(config: &SourceConfig) -> Result<Box<dyn GlossarySource>, SourceError> {
    match &config.path {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(HttpSource::new(
            config.url.clone(),
            config.timeout_seconds,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_takes_precedence_over_url() {
        let config = SourceConfig {
            path: Some("glossary.csv".to_string()),
            ..SourceConfig::default()
        };
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "file glossary.csv");
    }

    #[test]
    fn url_used_without_path() {
        let config = SourceConfig {
            url: "http://localhost:9/sheet.csv".to_string(),
            ..SourceConfig::default()
        };
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "url http://localhost:9/sheet.csv");
    }
}
