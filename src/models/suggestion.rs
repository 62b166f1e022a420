//! Autocomplete suggestion model.

use serde::{Deserialize, Serialize};

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Curated popular query shown before the user types
    Trending,
    /// Title of a record in the corpus
    Content,
}

/// A single autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SuggestionKind>,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn trending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(SuggestionKind::Trending),
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(SuggestionKind::Content),
        }
    }
}

impl From<&str> for Suggestion {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
