//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;
use storage::SourceError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl QuizServiceError {
    /// True when the data could not be fetched at all (as opposed to being invalid).
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

/// Errors emitted while building external search links.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("unknown search engine: {0}")]
    UnknownEngine(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
