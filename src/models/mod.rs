//! Data models for portfolio content.
//!
//! This module contains the searchable content record, its scored form,
//! and the autocomplete suggestion type.

pub mod content;
pub mod suggestion;

pub use content::{clean_text, ContentRecord, ContentType, RawContentRecord, ScoredResult};
pub use suggestion::{Suggestion, SuggestionKind};
