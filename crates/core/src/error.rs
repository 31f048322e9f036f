use thiserror::Error;

use crate::model::{DataError, ModuleId};

/// Errors emitted by `QuizSession` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid quiz data: {0}")]
    InvalidData(#[from] DataError),

    #[error("unknown module: {id}")]
    UnknownModule { id: ModuleId },

    #[error("question {index} is out of range for {count} questions")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option {index} is out of range for {count} options")]
    OptionOutOfRange { index: usize, count: usize },

    #[error("no module is active")]
    NoActiveModule,
}
