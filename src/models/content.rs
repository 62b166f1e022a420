//! Content record model: the unit of the searchable corpus.

use crate::domain::RecordId;
use crate::error::CorpusError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"));

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// The kind of portfolio content a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Project,
    Speaking,
    Award,
    Testimonial,
}

impl ContentType {
    /// All content types in display order.
    pub const ALL: [ContentType; 5] = [
        Self::Blog,
        Self::Project,
        Self::Speaking,
        Self::Award,
        Self::Testimonial,
    ];

    /// The lower-case label matched against queries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
            Self::Speaking => "speaking",
            Self::Award => "award",
            Self::Testimonial => "testimonial",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == normalized)
            .ok_or_else(|| CorpusError::UnknownContentType(s.to_string()))
    }
}

/// A validated, searchable content record.
///
/// Records are only constructed through [`ContentRecord::new`] or by
/// converting a [`RawContentRecord`], so every record in a corpus has a
/// non-blank id and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub id: RecordId,

    /// Display title; the primary match target
    pub title: String,

    /// Short description; the secondary match target
    pub excerpt: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Display-only date string, never used in ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ContentRecord {
    /// Create a record with an empty excerpt and no category or date.
    pub fn new(id: RecordId, title: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: String::new(),
            content_type,
            category: None,
            date: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// An unvalidated record as it arrives from a catalog or an external source.
///
/// Every field is optional so that malformed input can be reported with a
/// precise [`CorpusError`] instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContentRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl TryFrom<RawContentRecord> for ContentRecord {
    type Error = CorpusError;

    fn try_from(raw: RawContentRecord) -> Result<Self, Self::Error> {
        let raw_id = raw.id.unwrap_or_default();
        let id = RecordId::new(raw_id.clone()).map_err(|e| CorpusError::InvalidRecord {
            id: raw_id,
            reason: e.to_string(),
        })?;

        let title = raw
            .title
            .map(|t| clean_text(&t))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CorpusError::InvalidRecord {
                id: id.to_string(),
                reason: "title is required".to_string(),
            })?;

        let content_type = raw
            .content_type
            .ok_or_else(|| CorpusError::InvalidRecord {
                id: id.to_string(),
                reason: "type is required".to_string(),
            })?
            .parse::<ContentType>()?;

        Ok(Self {
            id,
            title,
            excerpt: raw.excerpt.map(|e| clean_text(&e)).unwrap_or_default(),
            content_type,
            category: non_blank(raw.category.map(|c| clean_text(&c))),
            date: non_blank(raw.date.map(|d| d.trim().to_string())),
        })
    }
}

/// A record paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: ContentRecord,

    #[serde(rename = "relevanceScore")]
    pub relevance_score: u32,
}

/// Strip inline markup and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let stripped = HTML_TAG_REGEX.replace_all(text, " ");
    WHITESPACE_REGEX.replace_all(stripped.trim(), " ").into_owned()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
