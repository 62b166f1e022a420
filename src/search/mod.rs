//! Ranked content search and autocomplete filtering.
//!
//! Both operations are pure functions over an in-memory slice: they never
//! fail, never mutate their input, and return the same output for the same
//! input.

pub mod autocomplete;
pub mod ranking;

pub use autocomplete::{
    filter_suggestions, filter_suggestions_with, NavKey, NavOutcome, Selection,
    SuggestionNavigator, DEFAULT_SUGGESTION_COUNT,
};
pub use ranking::{
    normalize_query, score_record, search, search_with, FieldWeights, RankingOptions,
    DEFAULT_MAX_RESULTS,
};
