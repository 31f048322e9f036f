mod components;
pub(crate) mod view;

pub use view::QuizView;
