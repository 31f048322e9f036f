use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::ModuleDraft;
use thiserror::Error;
use url::Url;

mod file;
mod http;
mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::InMemorySource;

/// Errors surfaced by quiz data sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    HttpStatus {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("malformed quiz document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid data location: {0}")]
    InvalidLocation(String),

    #[error("quiz data unavailable: {0}")]
    Unavailable(String),
}

/// Contract for anything that can supply the quiz document.
///
/// A source only fetches and parses; validation happens when the drafts are loaded into a
/// session.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Fetch and parse the document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the document cannot be read or parsed.
    async fn fetch(&self) -> Result<Vec<ModuleDraft>, SourceError>;

    /// Human-readable location, for logs and error messages.
    fn describe(&self) -> String;
}

/// Pick a source for `location`: HTTP(S) URLs go over the network, anything else is a path.
///
/// # Errors
///
/// Returns `SourceError::InvalidLocation` for blank locations or unparsable URLs.
pub fn open_source(location: &str) -> Result<Arc<dyn QuizSource>, SourceError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(SourceError::InvalidLocation(location.to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location)
            .map_err(|err| SourceError::InvalidLocation(format!("{location}: {err}")))?;
        return Ok(Arc::new(HttpSource::new(url)));
    }

    if location.starts_with("file://") {
        let path = Url::parse(location)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| SourceError::InvalidLocation(location.to_string()))?;
        return Ok(Arc::new(FileSource::new(path)));
    }

    Ok(Arc::new(FileSource::new(location)))
}
