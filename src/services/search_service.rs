//! Search service layer.
//!
//! Validates raw request input, then delegates to [`ContentSearchTools`].
//! Also owns catalog reloads, which replace every cached corpus at once.

use crate::corpus::Catalog;
use crate::domain::Locale;
use crate::error::{CorpusError, SearchError, SearchResult};
use crate::models::{ContentRecord, ContentType};
use crate::tools::{
    ContentSearchTools, ListParams, SearchParams, SearchResponse, SuggestParams, SuggestResponse,
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Longest query accepted, in characters.
pub const MAX_QUERY_CHARS: usize = 500;

/// Largest per-request result cutoff.
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Published locales and the one used when a request names none.
#[derive(Debug, Clone)]
pub struct LocaleInfo {
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
}

/// Search service trait for request-level operations.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Ranked search; an empty query returns no results.
    async fn search(
        &self,
        query: String,
        locale: Option<String>,
        max_results: Option<usize>,
    ) -> SearchResult<SearchResponse>;

    /// Autocomplete suggestions; an empty query returns the default slice.
    async fn suggest(&self, query: String, locale: Option<String>)
        -> SearchResult<SuggestResponse>;

    /// A single record by id.
    async fn get_content(&self, id: String, locale: Option<String>)
        -> SearchResult<ContentRecord>;

    /// Records newest first, optionally filtered by type label.
    async fn list_content(
        &self,
        locale: Option<String>,
        content_type: Option<String>,
        limit: Option<usize>,
    ) -> SearchResult<Vec<ContentRecord>>;

    /// Published locales.
    async fn locales(&self) -> LocaleInfo;

    /// Re-read the catalog file and replace every corpus.
    ///
    /// The new catalog must build for every published locale and still
    /// publish the default locale; otherwise the current one stays in place.
    /// Returns the number of catalog entries loaded.
    async fn reload_catalog(&self) -> SearchResult<usize>;
}

/// Default implementation of SearchService.
pub struct SearchServiceImpl {
    tools: Arc<RwLock<ContentSearchTools>>,
    catalog_path: Option<PathBuf>,
}

/// Validation helper functions.
impl SearchServiceImpl {
    fn validate_query(query: &str) -> SearchResult<()> {
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(SearchError::QueryTooLong {
                max: MAX_QUERY_CHARS,
            });
        }
        Ok(())
    }

    fn parse_locale(locale: Option<String>) -> SearchResult<Option<Locale>> {
        locale
            .filter(|tag| !tag.trim().is_empty())
            .map(|tag| {
                Locale::new(&tag).map_err(|e| SearchError::InvalidParameters(e.to_string()))
            })
            .transpose()
    }

    fn validate_limit(name: &str, limit: Option<usize>) -> SearchResult<Option<usize>> {
        match limit {
            Some(0) => Err(SearchError::InvalidParameters(format!(
                "{name} must be at least 1"
            ))),
            Some(n) if n > MAX_RESULTS_LIMIT => Err(SearchError::InvalidParameters(format!(
                "{name} must be at most {MAX_RESULTS_LIMIT}"
            ))),
            other => Ok(other),
        }
    }

    fn parse_content_type(content_type: Option<String>) -> SearchResult<Option<ContentType>> {
        content_type
            .filter(|t| !t.trim().is_empty())
            .map(|t| {
                t.parse::<ContentType>()
                    .map_err(|e| SearchError::InvalidParameters(e.to_string()))
            })
            .transpose()
    }
}

impl SearchServiceImpl {
    /// Create a new search service.
    ///
    /// `catalog_path` is the file [`reload_catalog`](SearchService::reload_catalog)
    /// re-reads; without it reloads are rejected.
    pub fn new(tools: Arc<RwLock<ContentSearchTools>>, catalog_path: Option<PathBuf>) -> Self {
        Self {
            tools,
            catalog_path,
        }
    }
}

#[async_trait]
impl SearchService for SearchServiceImpl {
    async fn search(
        &self,
        query: String,
        locale: Option<String>,
        max_results: Option<usize>,
    ) -> SearchResult<SearchResponse> {
        Self::validate_query(&query)?;
        let locale = Self::parse_locale(locale)?;
        let max_results = Self::validate_limit("max_results", max_results)?;

        tracing::debug!(
            query_len = query.len(),
            locale = ?locale,
            max_results = ?max_results,
            "Search requested"
        );

        let tools = self.tools.read().await;
        tools.search(SearchParams {
            query,
            locale,
            max_results,
        })
    }

    async fn suggest(
        &self,
        query: String,
        locale: Option<String>,
    ) -> SearchResult<SuggestResponse> {
        Self::validate_query(&query)?;
        let locale = Self::parse_locale(locale)?;

        let tools = self.tools.read().await;
        tools.suggest(SuggestParams { query, locale })
    }

    async fn get_content(
        &self,
        id: String,
        locale: Option<String>,
    ) -> SearchResult<ContentRecord> {
        if id.trim().is_empty() {
            return Err(SearchError::InvalidParameters(
                "Content ID cannot be empty".to_string(),
            ));
        }
        let locale = Self::parse_locale(locale)?;

        let tools = self.tools.read().await;
        tools.get(id.trim(), locale.as_ref())
    }

    async fn list_content(
        &self,
        locale: Option<String>,
        content_type: Option<String>,
        limit: Option<usize>,
    ) -> SearchResult<Vec<ContentRecord>> {
        let locale = Self::parse_locale(locale)?;
        let content_type = Self::parse_content_type(content_type)?;
        let limit = Self::validate_limit("limit", limit)?;

        let tools = self.tools.read().await;
        tools.list(ListParams {
            locale,
            content_type,
            limit,
        })
    }

    async fn locales(&self) -> LocaleInfo {
        let tools = self.tools.read().await;
        LocaleInfo {
            default_locale: tools.default_locale().clone(),
            locales: tools.locales().to_vec(),
        }
    }

    async fn reload_catalog(&self) -> SearchResult<usize> {
        let path = self.catalog_path.as_ref().ok_or_else(|| {
            SearchError::InvalidParameters(
                "No catalog file configured; the built-in catalog cannot be reloaded".to_string(),
            )
        })?;

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CorpusError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let catalog = Catalog::from_json_str(&json)?;
        let entries = catalog.len();

        // Keep serving the current catalog unless the new one builds everywhere
        self.tools.read().await.validate_catalog(&catalog)?;

        let mut tools = self.tools.write().await;
        tools.replace_catalog(Arc::new(catalog));

        tracing::info!(path = %path.display(), entries = entries, "Catalog reloaded");
        Ok(entries)
    }
}
