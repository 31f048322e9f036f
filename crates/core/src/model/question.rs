use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Minimum number of options a multiple-choice question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Unvalidated question as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: usize,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option,
            explanation: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Check the option count and the correct option index.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` if fewer than two options are given.
    /// Returns `QuestionError::CorrectOptionOutOfRange` if the correct index has no option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let count = self.options.len();
        if count < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions { count });
        }
        if self.correct_option >= count {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: self.correct_option,
                count,
            });
        }

        Ok(Question {
            text: self.text,
            options: self.options,
            correct_option: self.correct_option,
            explanation: self.explanation.filter(|text| !text.trim().is_empty()),
        })
    }
}

/// A validated, immutable multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct option {index} is out of range for {count} options")]
    CorrectOptionOutOfRange { index: usize, count: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
