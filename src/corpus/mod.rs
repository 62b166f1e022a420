//! Corpus construction from a localized content catalog.
//!
//! There is no global corpus: callers build one explicitly for the active
//! locale and replace it wholesale when the locale changes.

pub mod builder;
pub mod catalog;

pub use builder::{parse_date, Corpus};
pub use catalog::{Catalog, CatalogEntry, LocalizedText};
