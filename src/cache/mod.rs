//! Caching utilities.
//!
//! Built corpora are cached per locale with a TTL so a locale switch only
//! pays the construction cost once.

pub mod corpus_cache;

pub use corpus_cache::CorpusCache;
