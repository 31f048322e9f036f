mod answer;
mod ids;
mod module;
mod question;

pub use ids::ModuleId;

pub use answer::{AnswerOutcome, AnswerRecord, AnswerState, Progress, QuestionStatus, StatusKind};
pub use module::{DataError, ModuleDraft, QuizModule, validate_modules};
pub use question::{MIN_OPTIONS, Question, QuestionDraft, QuestionError};
