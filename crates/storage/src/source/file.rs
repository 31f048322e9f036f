use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::ModuleDraft;
use tracing::debug;

use super::{QuizSource, SourceError};
use crate::document::QuizDocument;

/// Reads the quiz document from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuizSource for FileSource {
    async fn fetch(&self) -> Result<Vec<ModuleDraft>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "quiz document read");
        Ok(QuizDocument::from_slice(&bytes)?.into_modules())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Basics": [{{"question": "1 + 1?", "options": ["1", "2"], "correctAnswer": 1}}]}}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let modules = source.fetch().await.unwrap();

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].id.as_str(), "Basics");
        assert_eq!(modules[0].questions[0].correct_option, 1);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
