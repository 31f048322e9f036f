use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::ModuleId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

/// Unvalidated module: an id plus its questions in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDraft {
    pub id: ModuleId,
    pub questions: Vec<QuestionDraft>,
}

impl ModuleDraft {
    #[must_use]
    pub fn new(id: impl Into<ModuleId>, questions: Vec<QuestionDraft>) -> Self {
        Self {
            id: id.into(),
            questions,
        }
    }

    /// Validate every question of this module.
    ///
    /// # Errors
    ///
    /// Returns `DataError::EmptyModule` if there are no questions, or
    /// `DataError::InvalidQuestion` for the first question that fails validation.
    pub fn validate(self) -> Result<QuizModule, DataError> {
        if self.questions.is_empty() {
            return Err(DataError::EmptyModule { module: self.id });
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (position, draft) in self.questions.into_iter().enumerate() {
            let question = draft.validate().map_err(|source| DataError::InvalidQuestion {
                module: self.id.clone(),
                position,
                source,
            })?;
            questions.push(question);
        }

        Ok(QuizModule {
            id: self.id,
            questions,
        })
    }
}

/// A named, ordered, non-empty set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizModule {
    id: ModuleId,
    questions: Vec<Question>,
}

impl QuizModule {
    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions; never zero for a validated module.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Validate a whole module set, keeping insertion order.
///
/// # Errors
///
/// Returns the first `DataError` found; nothing is partially accepted.
pub fn validate_modules(
    drafts: impl IntoIterator<Item = ModuleDraft>,
) -> Result<Vec<QuizModule>, DataError> {
    let mut seen = HashSet::new();
    let mut modules = Vec::new();
    for draft in drafts {
        if !seen.insert(draft.id.clone()) {
            return Err(DataError::DuplicateModule { module: draft.id });
        }
        modules.push(draft.validate()?);
    }
    Ok(modules)
}

//
// ─── DATA ERRORS ───────────────────────────────────────────────────────────────
//

/// Malformed module or question data rejected at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataError {
    #[error("module {module} has no questions")]
    EmptyModule { module: ModuleId },

    #[error("module {module} appears more than once")]
    DuplicateModule { module: ModuleId },

    #[error("module {module}, question {}: {source}", position + 1)]
    InvalidQuestion {
        module: ModuleId,
        position: usize,
        #[source]
        source: QuestionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_option(text: &str) -> QuestionDraft {
        QuestionDraft::new(text, ["A", "B"], 0)
    }

    #[test]
    fn empty_module_is_rejected() {
        let err = ModuleDraft::new("M1", Vec::new()).validate().unwrap_err();
        assert_eq!(
            err,
            DataError::EmptyModule {
                module: ModuleId::from("M1")
            }
        );
    }

    #[test]
    fn invalid_question_reports_module_and_position() {
        let draft = ModuleDraft::new(
            "M1",
            vec![two_option("Q1"), QuestionDraft::new("Q2", ["only"], 0)],
        );
        let err = draft.validate().unwrap_err();

        match &err {
            DataError::InvalidQuestion {
                module,
                position,
                source,
            } => {
                assert_eq!(module.as_str(), "M1");
                assert_eq!(*position, 1);
                assert_eq!(*source, QuestionError::TooFewOptions { count: 1 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "module M1, question 2: question needs at least 2 options, got 1"
        );
    }

    #[test]
    fn duplicate_modules_are_rejected() {
        let err = validate_modules([
            ModuleDraft::new("M1", vec![two_option("Q")]),
            ModuleDraft::new("M1", vec![two_option("Q")]),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateModule { .. }));
    }

    #[test]
    fn module_set_keeps_insertion_order() {
        let modules = validate_modules([
            ModuleDraft::new("Zeta", vec![two_option("Q")]),
            ModuleDraft::new("Alpha", vec![two_option("Q"), two_option("Q2")]),
        ])
        .unwrap();

        let ids: Vec<&str> = modules.iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["Zeta", "Alpha"]);
        assert_eq!(modules[1].len(), 2);
        assert_eq!(modules[1].question(1).map(Question::text), Some("Q2"));
    }
}
