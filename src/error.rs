//! Error types for the portfolio search crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Ranking and suggestion filtering never fail; errors only arise at the
//! configuration, corpus construction and request validation boundaries.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while loading a catalog or building a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A record is missing a required field or has an unusable value
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Two records share the same identifier
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// The record type is not one of the known content types
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// No text exists for the requested locale or the default locale
    #[error("Record {id} has no {field} for locale {locale}")]
    MissingTranslation {
        id: String,
        field: &'static str,
        locale: String,
    },

    /// The catalog does not publish the requested locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Failed to parse catalog JSON
    #[error("Catalog parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read the catalog file
    #[error("Failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Errors that can occur while serving search requests.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid search parameters
    #[error("Invalid search parameters: {0}")]
    InvalidParameters(String),

    /// Query exceeds the accepted length
    #[error("Search query too long (max {max} characters)")]
    QueryTooLong { max: usize },

    /// No record with the requested id exists in the corpus
    #[error("Content not found: {0}")]
    NotFound(String),

    /// The corpus for the requested locale could not be built
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// A replacement catalog cannot serve every published locale
    #[error("Catalog rejected: {0}")]
    CatalogRejected(#[source] CorpusError),
}

impl SearchError {
    /// Whether the error was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameters(_)
                | Self::QueryTooLong { .. }
                | Self::NotFound(_)
                | Self::Corpus(CorpusError::UnsupportedLocale(_))
        )
    }
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CorpusError
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;
