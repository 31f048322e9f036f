use quiz_core::QuizSession;
use quiz_core::model::{AnswerOutcome, Question, QuestionStatus, StatusKind};
use services::option_letter;

const DEFAULT_CORRECT_MESSAGE: &str = "Correct answer!";
const DEFAULT_INCORRECT_MESSAGE: &str = "Incorrect answer.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleOptionVm {
    pub id: String,
    pub selected: bool,
}

/// Highlight of a single option button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    SelectedCorrect,
    SelectedIncorrect,
    /// The correct option, shown after a different option was picked.
    RevealedCorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "option-btn",
            Self::SelectedCorrect => "option-btn selected correct",
            Self::SelectedIncorrect => "option-btn selected incorrect",
            Self::RevealedCorrect => "option-btn correct",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: String,
    pub text: String,
    pub state: OptionState,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number_label: String,
    pub total_label: String,
    pub text: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub index: usize,
    pub label: String,
    pub class: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressVm {
    pub percentage: u8,
    pub label: String,
    pub width_style: String,
    pub answered_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub title: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerModalVm {
    pub question: String,
    pub answer_label: String,
    pub explanation: Option<String>,
}

/// Everything the quiz page renders, computed from one session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizPageVm {
    pub modules: Vec<ModuleOptionVm>,
    pub question: Option<QuestionVm>,
    pub navigator: Vec<NavItemVm>,
    pub progress: ProgressVm,
    pub feedback: Option<FeedbackVm>,
    pub answer_modal: Option<AnswerModalVm>,
    pub can_previous: bool,
    pub can_next: bool,
}

#[must_use]
pub fn map_quiz_page(
    session: &QuizSession,
    feedback: Option<&AnswerOutcome>,
    show_answer: bool,
) -> QuizPageVm {
    let active = session.active_module_id();
    let modules = session
        .module_ids()
        .map(|id| ModuleOptionVm {
            id: id.to_string(),
            selected: Some(id) == active,
        })
        .collect();

    let question = session
        .current_question()
        .ok()
        .zip(session.current_index())
        .map(|(question, index)| {
            map_question(question, index, session.question_count(), session.outcome_of(index))
        });

    let answer_modal = if show_answer {
        session.current_question().ok().map(map_answer_modal)
    } else {
        None
    };

    QuizPageVm {
        modules,
        question,
        navigator: map_navigator(&session.statuses()),
        progress: map_progress(session),
        feedback: feedback.map(map_feedback),
        answer_modal,
        can_previous: session.has_previous(),
        can_next: session.has_next(),
    }
}

#[must_use]
pub fn map_question(
    question: &Question,
    index: usize,
    total: usize,
    outcome: Option<AnswerOutcome>,
) -> QuestionVm {
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(option, text)| {
            let state = match &outcome {
                None => OptionState::Neutral,
                Some(outcome) if outcome.selected == option => {
                    if outcome.correct {
                        OptionState::SelectedCorrect
                    } else {
                        OptionState::SelectedIncorrect
                    }
                }
                Some(outcome) if outcome.correct_option == option => OptionState::RevealedCorrect,
                Some(_) => OptionState::Neutral,
            };
            OptionVm {
                index: option,
                letter: option_letter(option),
                text: text.clone(),
                state,
                locked: outcome.is_some(),
            }
        })
        .collect();

    QuestionVm {
        number_label: format!("Question {}", index + 1),
        total_label: format!("of {total}"),
        text: question.text().to_string(),
        options,
    }
}

#[must_use]
pub fn map_navigator(statuses: &[QuestionStatus]) -> Vec<NavItemVm> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            let mut class = match status.display() {
                StatusKind::IsCurrent => "nav-btn nav-btn--current",
                StatusKind::AnsweredCorrect => "nav-btn nav-btn--correct",
                StatusKind::AnsweredIncorrect => "nav-btn nav-btn--incorrect",
                StatusKind::Unanswered => "nav-btn nav-btn--unanswered",
            }
            .to_string();
            if status.is_current && status.is_answered() {
                class.push_str(" nav-btn--answered");
            }
            NavItemVm {
                index,
                label: (index + 1).to_string(),
                class,
                is_current: status.is_current,
            }
        })
        .collect()
}

#[must_use]
pub fn map_progress(session: &QuizSession) -> ProgressVm {
    let progress = session.progress();
    ProgressVm {
        percentage: progress.percentage,
        label: format!("{}%", progress.percentage),
        width_style: format!("width: {}%;", progress.percentage),
        answered_label: format!(
            "{} / {} answered",
            progress.answered_count, progress.total_count
        ),
    }
}

#[must_use]
pub fn map_feedback(outcome: &AnswerOutcome) -> FeedbackVm {
    let (title, fallback) = if outcome.correct {
        ("Correct!", DEFAULT_CORRECT_MESSAGE)
    } else {
        ("Incorrect!", DEFAULT_INCORRECT_MESSAGE)
    };
    FeedbackVm {
        correct: outcome.correct,
        title,
        message: outcome
            .explanation
            .clone()
            .unwrap_or_else(|| fallback.to_string()),
    }
}

#[must_use]
pub fn map_answer_modal(question: &Question) -> AnswerModalVm {
    AnswerModalVm {
        question: question.text().to_string(),
        answer_label: format!(
            "{}. {}",
            option_letter(question.correct_option()),
            question.correct_text()
        ),
        explanation: question.explanation().map(str::to_owned),
    }
}
