use std::sync::Arc;

use quiz_core::QuizSession;
use storage::{InMemorySource, QuizSource};
use tracing::{info, warn};

use crate::error::QuizServiceError;

/// Presentation-facing facade that turns a data source into quiz sessions.
///
/// This service owns the data source; it does **not** own any session. Each caller
/// receives its own `QuizSession`.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn QuizSource>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuizSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn in_memory(json: impl Into<String>) -> Self {
        Self::new(Arc::new(InMemorySource::new(json)))
    }

    /// Where the quiz data comes from.
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Fetch the document and build a fresh session with the first module active.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Source` if fetching or parsing fails, and
    /// `QuizServiceError::Session` if the data is invalid.
    pub async fn load_session(&self) -> Result<QuizSession, QuizServiceError> {
        let mut session = QuizSession::new();
        self.reload(&mut session).await?;
        Ok(session)
    }

    /// Fetch the document again and load it into `session`.
    ///
    /// On failure `session` keeps whatever it held before the call.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Source` if fetching or parsing fails, and
    /// `QuizServiceError::Session` if the data is invalid.
    pub async fn reload(&self, session: &mut QuizSession) -> Result<(), QuizServiceError> {
        let location = self.source.describe();
        info!(%location, "loading quiz data");

        let modules = self.source.fetch().await.inspect_err(|err| {
            warn!(%location, error = %err, "failed to fetch quiz data");
        })?;

        session.load(modules).inspect_err(|err| {
            warn!(%location, error = %err, "rejected quiz data");
        })?;

        info!(
            %location,
            modules = session.modules().len(),
            active = ?session.active_module_id(),
            "quiz data loaded"
        );
        Ok(())
    }
}
