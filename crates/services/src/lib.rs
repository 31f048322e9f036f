#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;
pub mod search;

pub use error::{QuizServiceError, SearchError};
pub use quiz_service::QuizService;
pub use search::{SearchEngine, option_letter, search_query, search_url};
