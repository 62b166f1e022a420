//! Portfolio Search - ranked content search and autocomplete for a hospitality
//! executive's portfolio site, with an MCP server front end.
//!
//! The core is two pure functions over an in-memory, locale-specific corpus:
//! [`search`](search::search) ranks records by weighted keyword matches and
//! [`filter_suggestions`](search::filter_suggestions) filters autocomplete
//! candidates. Everything else builds, caches and serves that corpus.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (record IDs, locale tags)
//! - **models**: Content records, scored results and suggestions
//! - **search**: Ranking engine and autocomplete filter/navigator
//! - **corpus**: Localized catalog and per-locale corpus construction
//! - **cache**: Per-locale corpus cache with TTL
//! - **tools**: Search operations over cached corpora
//! - **services**: Request validation and catalog reloads
//! - **server**: MCP protocol server
//! - **config** / **error** / **observability**: Ambient concerns

pub mod cache;
pub mod config;
pub mod corpus;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod server;
pub mod services;
pub mod tools;

pub use cache::CorpusCache;
pub use config::Config;
pub use corpus::{Catalog, Corpus};
pub use domain::{Locale, RecordId};
pub use error::{ConfigError, CorpusError, SearchError};
pub use models::{ContentRecord, ContentType, ScoredResult, Suggestion};
pub use observability::MetricsTracker;
pub use search::{
    filter_suggestions, search, search_with, FieldWeights, RankingOptions, SuggestionNavigator,
};
pub use server::PortfolioSearchServer;
pub use services::{SearchService, SearchServiceImpl};
pub use tools::ContentSearchTools;
