//! Codec for the static quiz document.
//!
//! The document is a JSON object whose keys are module names and whose values are arrays of
//! `{ "question", "options", "correctAnswer", "explanation"? }`. Key order is kept, since
//! it is the module display order.

use std::fmt;

use quiz_core::model::{ModuleDraft, QuestionDraft};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::source::SourceError;

/// Wire shape of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            text: self.question,
            options: self.options,
            correct_option: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// Parsed quiz document: module drafts in document order, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDocument {
    modules: Vec<ModuleDraft>,
}

impl QuizDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the text is not a well-formed quiz document.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a document from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the bytes are not a well-formed quiz document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SourceError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    #[must_use]
    pub fn modules(&self) -> &[ModuleDraft] {
        &self.modules
    }

    #[must_use]
    pub fn into_modules(self) -> Vec<ModuleDraft> {
        self.modules
    }
}

impl<'de> Deserialize<'de> for QuizDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = QuizDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping module names to question arrays")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut modules = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, records)) = map.next_entry::<String, Vec<QuestionRecord>>()? {
                    let questions = records.into_iter().map(QuestionRecord::into_draft).collect();
                    modules.push(ModuleDraft::new(name, questions));
                }
                Ok(QuizDocument { modules })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
