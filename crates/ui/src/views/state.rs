use dioxus::prelude::*;
use services::QuizServiceError;
use storage::SourceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoadFailed,
    InvalidData,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::LoadFailed => "Failed to load quiz data. Please try again.",
            Self::InvalidData => "The quiz data is malformed and could not be loaded.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn from_service(err: &QuizServiceError) -> Self {
        match err {
            QuizServiceError::Source(SourceError::Parse(_)) => Self::InvalidData,
            QuizServiceError::Source(_) => Self::LoadFailed,
            QuizServiceError::Session(_) => Self::InvalidData,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
