//! Weighted keyword ranking over an in-memory corpus.
//!
//! A record's score is the sum of the weights of every field that contains
//! the normalized query as a substring. Records scoring zero are dropped,
//! the rest are stably sorted by descending score and truncated.

use crate::models::{ContentRecord, ScoredResult};
use serde::{Deserialize, Serialize};

/// Default weight for a title match.
pub const DEFAULT_TITLE_WEIGHT: u32 = 10;

/// Default weight for an excerpt match.
pub const DEFAULT_EXCERPT_WEIGHT: u32 = 5;

/// Default weight for a category match.
pub const DEFAULT_CATEGORY_WEIGHT: u32 = 3;

/// Default weight for a content type label match.
pub const DEFAULT_TYPE_WEIGHT: u32 = 2;

/// Default number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Per-field weights added to a record's score when the field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub title: u32,
    pub excerpt: u32,
    pub category: u32,
    pub content_type: u32,
}

impl FieldWeights {
    /// Whether every weight is zero, in which case nothing can ever match.
    pub fn is_zero(&self) -> bool {
        self.title == 0 && self.excerpt == 0 && self.category == 0 && self.content_type == 0
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_WEIGHT,
            excerpt: DEFAULT_EXCERPT_WEIGHT,
            category: DEFAULT_CATEGORY_WEIGHT,
            content_type: DEFAULT_TYPE_WEIGHT,
        }
    }
}

/// Tunable ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    pub weights: FieldWeights,
    pub max_results: usize,
}

impl RankingOptions {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Rank `corpus` against `query` with the default weights and cutoff.
///
/// The query is trimmed and compared case-insensitively. An empty or
/// whitespace-only query yields no results.
///
/// # Example
///
/// ```
/// use portfolio_search::domain::RecordId;
/// use portfolio_search::models::{ContentRecord, ContentType};
/// use portfolio_search::search::search;
///
/// let corpus = vec![
///     ContentRecord::new(RecordId::new("a").unwrap(), "Hotel Management", ContentType::Blog),
///     ContentRecord::new(RecordId::new("b").unwrap(), "Pre-Opening Operations", ContentType::Project)
///         .with_excerpt("hotel strategy"),
/// ];
///
/// let results = search("hotel", &corpus);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].record.title, "Hotel Management");
/// assert_eq!(results[0].relevance_score, 10);
/// assert_eq!(results[1].relevance_score, 5);
/// ```
pub fn search(query: &str, corpus: &[ContentRecord]) -> Vec<ScoredResult> {
    search_with(query, corpus, &RankingOptions::default())
}

/// Rank `corpus` against `query` using explicit options.
pub fn search_with(
    query: &str,
    corpus: &[ContentRecord],
    options: &RankingOptions,
) -> Vec<ScoredResult> {
    let needle = normalize_query(query);
    if needle.is_empty() || options.max_results == 0 {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = corpus
        .iter()
        .filter_map(|record| {
            let relevance_score = score_record(&needle, record, &options.weights);
            (relevance_score > 0).then(|| ScoredResult {
                record: record.clone(),
                relevance_score,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep corpus order
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(options.max_results);

    results
}

/// Score a single record against an already-normalized query.
pub fn score_record(needle: &str, record: &ContentRecord, weights: &FieldWeights) -> u32 {
    let mut score = 0u32;

    if contains_ci(&record.title, needle) {
        score = score.saturating_add(weights.title);
    }
    if contains_ci(&record.excerpt, needle) {
        score = score.saturating_add(weights.excerpt);
    }
    if record
        .category
        .as_deref()
        .is_some_and(|category| contains_ci(category, needle))
    {
        score = score.saturating_add(weights.category);
    }
    if record.content_type.label().contains(needle) {
        score = score.saturating_add(weights.content_type);
    }

    score
}

/// Trim and lower-case a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
