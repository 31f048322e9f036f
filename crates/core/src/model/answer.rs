use std::collections::BTreeMap;

/// Write-once map of question index → selected option index for the active module.
///
/// Presence of an entry means the question was answered; absence means it was not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    selected: BTreeMap<usize, usize>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, question: usize) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    #[must_use]
    pub fn contains(&self, question: usize) -> bool {
        self.selected.contains_key(&question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Record `option` for `question` unless an answer already exists.
    ///
    /// Returns the option that is stored after the call.
    pub(crate) fn record_once(&mut self, question: usize, option: usize) -> usize {
        *self.selected.entry(question).or_insert(option)
    }
}

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: usize,
    pub selected: usize,
    pub correct: bool,
    pub correct_option: usize,
    pub explanation: Option<String>,
}

/// Answered-correctness of a question, independent of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Correct,
    Incorrect,
}

/// Display category where the current question wins over its answer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Unanswered,
    AnsweredCorrect,
    AnsweredIncorrect,
    IsCurrent,
}

/// Per-question render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionStatus {
    pub is_current: bool,
    pub answer: AnswerState,
}

impl QuestionStatus {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answer != AnswerState::Unanswered
    }

    #[must_use]
    pub fn display(&self) -> StatusKind {
        if self.is_current {
            return StatusKind::IsCurrent;
        }
        match self.answer {
            AnswerState::Unanswered => StatusKind::Unanswered,
            AnswerState::Correct => StatusKind::AnsweredCorrect,
            AnswerState::Incorrect => StatusKind::AnsweredIncorrect,
        }
    }
}

/// Answered share of the active module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub answered_count: usize,
    pub total_count: usize,
    pub percentage: u8,
}

impl Progress {
    #[must_use]
    pub fn new(answered_count: usize, total_count: usize) -> Self {
        Self {
            answered_count,
            total_count,
            percentage: rounded_percentage(answered_count, total_count),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.answered_count >= self.total_count
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u128;
    let whole = whole as u128;
    let pct = (part * 200 + whole) / (whole * 2);
    u8::try_from(pct).unwrap_or(100)
}
