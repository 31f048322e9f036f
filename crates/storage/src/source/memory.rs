use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::ModuleDraft;

use super::{QuizSource, SourceError};
use crate::document::QuizDocument;

/// In-memory document source for tests and demos.
///
/// Clones share the same document, so a test can swap or remove it after handing the
/// source to a service.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    document: Arc<Mutex<Option<String>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            document: Arc::new(Mutex::new(Some(json.into()))),
        }
    }

    /// A source with no document; every fetch fails with `SourceError::Unavailable`.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Replace the served document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn set_document(&self, json: impl Into<String>) -> Result<(), SourceError> {
        let mut guard = self
            .document
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        *guard = Some(json.into());
        Ok(())
    }

    /// Stop serving a document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn clear(&self) -> Result<(), SourceError> {
        let mut guard = self
            .document
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[async_trait]
impl QuizSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<ModuleDraft>, SourceError> {
        let json = {
            let guard = self
                .document
                .lock()
                .map_err(|e| SourceError::Unavailable(e.to_string()))?;
            guard
                .clone()
                .ok_or_else(|| SourceError::Unavailable("no document".to_string()))?
        };
        Ok(QuizDocument::from_json(&json)?.into_modules())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"M1": [{"question": "Q1", "options": ["A", "B"], "correctAnswer": 1}]}"#;

    #[tokio::test]
    async fn serves_current_document() {
        let source = InMemorySource::new(DOC);
        let modules = source.fetch().await.unwrap();
        assert_eq!(modules.len(), 1);

        source.set_document("{}").unwrap();
        assert!(source.fetch().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cleared_source_is_unavailable() {
        let source = InMemorySource::new(DOC);
        let shared = source.clone();
        shared.clear().unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
        assert!(matches!(
            InMemorySource::unavailable().fetch().await.unwrap_err(),
            SourceError::Unavailable(_)
        ));
    }
}
