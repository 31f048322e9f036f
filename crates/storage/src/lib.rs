#![forbid(unsafe_code)]

pub mod document;
pub mod source;

pub use document::QuizDocument;
pub use source::{FileSource, HttpSource, InMemorySource, QuizSource, SourceError, open_source};
