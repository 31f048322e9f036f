use tracing::debug;

use crate::error::SessionError;
use crate::model::{
    AnswerOutcome, AnswerRecord, AnswerState, ModuleDraft, ModuleId, Progress, Question,
    QuestionStatus, QuizModule, validate_modules,
};

//
// ─── ACTIVE MODULE STATE ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveModule {
    /// Position of the module in `QuizSession::modules`.
    module: usize,
    /// Always `< modules[module].len()`.
    current: usize,
    answers: AnswerRecord,
}

impl ActiveModule {
    fn fresh(module: usize) -> Self {
        Self {
            module,
            current: 0,
            answers: AnswerRecord::new(),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz session state machine.
///
/// Owns the loaded module set, the active module, the current question pointer and the
/// write-once answers for the active module. A session is owned by exactly one view
/// context; it is not meant to be shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    modules: Vec<QuizModule>,
    active: Option<ActiveModule>,
}

impl QuizSession {
    /// An empty session with no modules and no active module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the module set and activate the first module, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidData` if any module is empty, duplicated, or holds an
    /// invalid question. The session is left exactly as it was.
    pub fn load(
        &mut self,
        modules: impl IntoIterator<Item = ModuleDraft>,
    ) -> Result<(), SessionError> {
        let modules = validate_modules(modules)?;
        self.active = (!modules.is_empty()).then(|| ActiveModule::fresh(0));
        self.modules = modules;
        debug!(
            modules = self.modules.len(),
            active = ?self.active_module_id(),
            "quiz modules loaded"
        );
        Ok(())
    }

    // ─── Module selection ─────────────────────────────────────────────────────

    /// Loaded modules in display order.
    #[must_use]
    pub fn modules(&self) -> &[QuizModule] {
        &self.modules
    }

    pub fn module_ids(&self) -> impl Iterator<Item = &ModuleId> + '_ {
        self.modules.iter().map(QuizModule::id)
    }

    #[must_use]
    pub fn active_module(&self) -> Option<&QuizModule> {
        self.active
            .as_ref()
            .and_then(|active| self.modules.get(active.module))
    }

    #[must_use]
    pub fn active_module_id(&self) -> Option<&ModuleId> {
        self.active_module().map(QuizModule::id)
    }

    /// Activate `id`, resetting the pointer and answers even if it is already active.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownModule` if `id` is not loaded.
    pub fn select_module(&mut self, id: &str) -> Result<(), SessionError> {
        let position = self
            .modules
            .iter()
            .position(|module| module.id().as_str() == id)
            .ok_or_else(|| SessionError::UnknownModule { id: id.into() })?;
        self.active = Some(ActiveModule::fresh(position));
        debug!(module = id, "module selected");
        Ok(())
    }

    /// Start the active module over: clear answers and return to the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveModule` if no module is active.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveModule)?;
        *active = ActiveModule::fresh(active.module);
        Ok(())
    }

    // ─── Navigation ───────────────────────────────────────────────────────────

    /// Number of questions in the active module; 0 when none is active.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.active_module().map_or(0, QuizModule::len)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.current)
    }

    /// Jump to question `index` of the active module.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveModule` if no module is active.
    /// Returns `SessionError::QuestionOutOfRange` if `index` has no question.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        let count = self.question_count();
        let active = self.active.as_mut().ok_or(SessionError::NoActiveModule)?;
        if index >= count {
            return Err(SessionError::QuestionOutOfRange { index, count });
        }
        active.current = index;
        Ok(())
    }

    /// Advance one question. Returns `false` (and does nothing) at the last question.
    pub fn next(&mut self) -> bool {
        let count = self.question_count();
        match self.active.as_mut() {
            Some(active) if active.current + 1 < count => {
                active.current += 1;
                true
            }
            _ => false,
        }
    }

    /// Go back one question. Returns `false` (and does nothing) at the first question.
    pub fn previous(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) if active.current > 0 => {
                active.current -= 1;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index()
            .is_some_and(|current| current + 1 < self.question_count())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index().is_some_and(|current| current > 0)
    }

    // ─── Answering ────────────────────────────────────────────────────────────

    /// The question under the pointer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveModule` if no module is active.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        let active = self.active.as_ref().ok_or(SessionError::NoActiveModule)?;
        self.modules
            .get(active.module)
            .and_then(|module| module.question(active.current))
            .ok_or(SessionError::NoActiveModule)
    }

    /// Answer the current question with `option`.
    ///
    /// The first answer is final: later calls for the same question return the stored
    /// outcome whatever option they pass.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveModule` if no module is active.
    /// Returns `SessionError::OptionOutOfRange` if `option` does not exist.
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, SessionError> {
        let count = self.current_question()?.option_count();
        if option >= count {
            return Err(SessionError::OptionOutOfRange {
                index: option,
                count,
            });
        }

        let active = self.active.as_mut().ok_or(SessionError::NoActiveModule)?;
        let question = active.current;
        let already_answered = active.answers.contains(question);
        active.answers.record_once(question, option);
        if !already_answered {
            debug!(question, option, "answer recorded");
        }

        self.outcome_of(question)
            .ok_or(SessionError::QuestionOutOfRange {
                index: question,
                count: self.question_count(),
            })
    }

    /// Recorded outcome for `index`, if that question has been answered.
    #[must_use]
    pub fn outcome_of(&self, index: usize) -> Option<AnswerOutcome> {
        let active = self.active.as_ref()?;
        let selected = active.answers.get(index)?;
        let question = self.modules.get(active.module)?.question(index)?;
        Some(AnswerOutcome {
            question: index,
            selected,
            correct: question.is_correct(selected),
            correct_option: question.correct_option(),
            explanation: question.explanation().map(str::to_owned),
        })
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerRecord> {
        self.active.as_ref().map(|active| &active.answers)
    }

    // ─── Derived state ────────────────────────────────────────────────────────

    /// Answered share of the active module; all zeros when none is active.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let answered = self.answers().map_or(0, AnswerRecord::len);
        Progress::new(answered, self.question_count())
    }

    /// Render state of question `index` in the active module.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveModule` if no module is active.
    /// Returns `SessionError::QuestionOutOfRange` if `index` has no question.
    pub fn status_of(&self, index: usize) -> Result<QuestionStatus, SessionError> {
        let active = self.active.as_ref().ok_or(SessionError::NoActiveModule)?;
        let count = self.question_count();
        if index >= count {
            return Err(SessionError::QuestionOutOfRange { index, count });
        }

        let answer = match self.outcome_of(index) {
            None => AnswerState::Unanswered,
            Some(outcome) if outcome.correct => AnswerState::Correct,
            Some(_) => AnswerState::Incorrect,
        };

        Ok(QuestionStatus {
            is_current: active.current == index,
            answer,
        })
    }

    /// Status of every question in the active module, in order.
    #[must_use]
    pub fn statuses(&self) -> Vec<QuestionStatus> {
        (0..self.question_count())
            .filter_map(|index| self.status_of(index).ok())
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::QuestionDraft;
    use proptest::prelude::*;

    /// Modules described by (option count, correct option) per question.
    fn module_shapes() -> impl Strategy<Value = Vec<Vec<(usize, usize)>>> {
        let question = (2usize..6).prop_flat_map(|options| (Just(options), 0..options));
        prop::collection::vec(prop::collection::vec(question, 1..8), 1..4)
    }

    fn build(shapes: &[Vec<(usize, usize)>]) -> Vec<ModuleDraft> {
        shapes
            .iter()
            .enumerate()
            .map(|(m, questions)| {
                let drafts = questions
                    .iter()
                    .enumerate()
                    .map(|(q, (options, correct))| {
                        let labels = (0..*options).map(|o| format!("option {o}"));
                        QuestionDraft::new(format!("question {q}"), labels, *correct)
                    })
                    .collect();
                ModuleDraft::new(format!("module {m}"), drafts)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn progress_matches_rounded_ratio(
            shapes in module_shapes(),
            picks in prop::collection::vec((0usize..8, 0usize..6), 0..20),
        ) {
            let mut session = QuizSession::new();
            session.load(build(&shapes)).unwrap();

            for (question, option) in picks {
                if session.go_to(question).is_ok() {
                    let _ = session.answer(option);
                }
                let progress = session.progress();
                prop_assert!(progress.percentage <= 100);
                prop_assert!(progress.answered_count <= progress.total_count);
                let expected =
                    (100.0 * progress.answered_count as f64 / progress.total_count as f64).round();
                prop_assert_eq!(f64::from(progress.percentage), expected);
            }
        }

        #[test]
        fn first_answer_wins(shapes in module_shapes(), first in 0usize..6, second in 0usize..6) {
            let mut session = QuizSession::new();
            session.load(build(&shapes)).unwrap();
            let options = session.current_question().unwrap().option_count();
            prop_assume!(first < options && second < options);

            let a = session.answer(first).unwrap();
            let b = session.answer(second).unwrap();
            prop_assert_eq!(a.selected, first);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn go_to_selects_that_question(shapes in module_shapes()) {
            let mut session = QuizSession::new();
            session.load(build(&shapes)).unwrap();
            let module = session.active_module().unwrap().clone();
            for (index, question) in module.questions().iter().enumerate() {
                session.go_to(index).unwrap();
                prop_assert_eq!(session.current_question().unwrap(), question);
            }
        }

        #[test]
        fn module_switch_always_resets(shapes in module_shapes(), target in 0usize..4) {
            let mut session = QuizSession::new();
            session.load(build(&shapes)).unwrap();
            prop_assume!(target < shapes.len());

            let _ = session.answer(0);
            session.next();
            let id = format!("module {target}");
            session.select_module(&id).unwrap();

            prop_assert_eq!(session.current_index(), Some(0));
            prop_assert!(session.answers().is_some_and(AnswerRecord::is_empty));
        }

        #[test]
        fn edges_are_noops(shapes in module_shapes()) {
            let mut session = QuizSession::new();
            session.load(build(&shapes)).unwrap();
            prop_assert!(!session.previous());
            prop_assert_eq!(session.current_index(), Some(0));

            let last = session.question_count() - 1;
            session.go_to(last).unwrap();
            prop_assert!(!session.next());
            prop_assert_eq!(session.current_index(), Some(last));
        }
    }
}
