//! Links for looking a question up on an external search engine.

use std::fmt;
use std::str::FromStr;

use quiz_core::model::Question;
use url::Url;

use crate::error::SearchError;

/// External engine used by the "search online" action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchEngine {
    #[default]
    Google,
    ChatGpt,
}

impl SearchEngine {
    fn base_url(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/search",
            Self::ChatGpt => "https://chatgpt.com/",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => f.write_str("google"),
            Self::ChatGpt => f.write_str("chatgpt"),
        }
    }
}

impl FromStr for SearchEngine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "chatgpt" => Ok(Self::ChatGpt),
            other => Err(SearchError::UnknownEngine(other.to_string())),
        }
    }
}

/// Letter label for an option: `A`, `B`, … `Z`, then `27`, `28`, …
#[must_use]
pub fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or_else(|| (index + 1).to_string(), |i| char::from(b'A' + i).to_string())
}

/// Question text followed by each option as ` A) text`.
#[must_use]
pub fn search_query(question: &Question) -> String {
    let mut query = question.text().to_string();
    for (index, option) in question.options().iter().enumerate() {
        query.push(' ');
        query.push_str(&option_letter(index));
        query.push_str(") ");
        query.push_str(option);
    }
    query
}

/// Search link for `question` on `engine`, with the query percent-encoded.
///
/// # Errors
///
/// Returns `SearchError::Url` if the engine URL cannot be built.
pub fn search_url(engine: SearchEngine, question: &Question) -> Result<Url, SearchError> {
    let mut url = Url::parse(engine.base_url())?;
    url.query_pairs_mut()
        .append_pair("q", &search_query(question));
    Ok(url)
}
