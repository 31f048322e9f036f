use quiz_core::model::AnswerOutcome;
use quiz_core::{QuizSession, SessionError};
use services::{SearchEngine, SearchError, search_url};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::page_vm::{QuizPageVm, map_quiz_page};

/// User gestures forwarded from the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectModule(String),
    GoTo(usize),
    Next,
    Previous,
    Answer(usize),
    ShowAnswer,
    HideAnswer,
    SearchOnline,
    Restart,
}

/// Side effect the view has to perform after an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    None,
    OpenUrl(Url),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizVmError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// View adapter for one quiz session.
///
/// Owns the session exclusively; every intent calls one session mutator and the page is
/// re-read from the session afterwards.
pub struct QuizVm {
    session: QuizSession,
    search_engine: SearchEngine,
    feedback: Option<AnswerOutcome>,
    show_answer: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession, search_engine: SearchEngine) -> Self {
        Self {
            session,
            search_engine,
            feedback: None,
            show_answer: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn has_question(&self) -> bool {
        self.session.current_question().is_ok()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerOutcome> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_answer_shown(&self) -> bool {
        self.show_answer
    }

    #[must_use]
    pub fn page(&self) -> QuizPageVm {
        map_quiz_page(&self.session, self.feedback.as_ref(), self.show_answer)
    }

    /// Apply `intent` to the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizVmError::Session` when the session rejects the call (unknown module,
    /// out-of-range index, no active module) and `QuizVmError::Search` if the search link
    /// cannot be built. The session is unchanged in both cases.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizEffect, QuizVmError> {
        debug!(?intent, "quiz intent");
        match intent {
            QuizIntent::SelectModule(id) => {
                self.session.select_module(&id)?;
                info!(module = %id, "switched quiz module");
                self.reset_transient();
            }
            QuizIntent::GoTo(index) => {
                self.session.go_to(index)?;
                self.reset_transient();
            }
            QuizIntent::Next => {
                if self.session.next() {
                    self.reset_transient();
                }
            }
            QuizIntent::Previous => {
                if self.session.previous() {
                    self.reset_transient();
                }
            }
            QuizIntent::Answer(option) => {
                let index = self.session.current_index();
                let already_answered =
                    index.is_some_and(|index| self.session.outcome_of(index).is_some());
                let outcome = self.session.answer(option)?;
                if !already_answered {
                    info!(
                        question = outcome.question,
                        option,
                        correct = outcome.correct,
                        "answer recorded"
                    );
                    self.feedback = Some(outcome);
                }
            }
            QuizIntent::ShowAnswer => {
                self.session.current_question()?;
                self.show_answer = true;
            }
            QuizIntent::HideAnswer => {
                self.show_answer = false;
            }
            QuizIntent::SearchOnline => {
                let url = search_url(self.search_engine, self.session.current_question()?)?;
                return Ok(QuizEffect::OpenUrl(url));
            }
            QuizIntent::Restart => {
                self.session.restart()?;
                self.reset_transient();
            }
        }
        Ok(QuizEffect::None)
    }

    fn reset_transient(&mut self) {
        self.feedback = None;
        self.show_answer = false;
    }
}
