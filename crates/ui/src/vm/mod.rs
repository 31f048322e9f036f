mod page_vm;
mod quiz_vm;

pub use page_vm::{
    AnswerModalVm, FeedbackVm, ModuleOptionVm, NavItemVm, OptionState, OptionVm, ProgressVm,
    QuestionVm, QuizPageVm, map_quiz_page,
};
pub use quiz_vm::{QuizEffect, QuizIntent, QuizVm, QuizVmError};
