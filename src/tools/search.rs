//! Search tools over cached, locale-specific corpora.
//!
//! Each request names a locale (or falls back to the configured default);
//! the corpus for that locale is built from the catalog on first use and
//! cached for the configured TTL.

use crate::cache::CorpusCache;
use crate::corpus::{Catalog, Corpus};
use crate::domain::Locale;
use crate::error::{SearchError, SearchResult};
use crate::models::{ContentRecord, ContentType, ScoredResult, Suggestion};
use crate::observability::{MetricsTracker, Timer};
use crate::search::{filter_suggestions_with, RankingOptions};
use std::sync::Arc;

/// Parameters for a ranked search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub query: String,

    /// Locale to search; the configured default when `None`
    pub locale: Option<Locale>,

    /// Overrides the configured cutoff when set
    pub max_results: Option<usize>,
}

/// Ranked results with cache metadata.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub locale: Locale,
    pub results: Vec<ScoredResult>,

    /// Whether the corpus came from cache
    pub from_cache: bool,

    /// Number of records in the searched corpus
    pub corpus_size: usize,
}

/// Parameters for an autocomplete lookup.
#[derive(Debug, Clone, Default)]
pub struct SuggestParams {
    pub query: String,
    pub locale: Option<Locale>,
}

/// Filtered suggestions for one query.
#[derive(Debug, Clone)]
pub struct SuggestResponse {
    pub locale: Locale,
    pub suggestions: Vec<Suggestion>,
}

/// Parameters for browsing records without a query.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub locale: Option<Locale>,
    pub content_type: Option<ContentType>,
    pub limit: Option<usize>,
}

/// Search, suggestion and lookup operations for the server.
#[derive(Clone)]
pub struct ContentSearchTools {
    catalog: Arc<Catalog>,
    cache: CorpusCache,
    ranking: RankingOptions,
    suggestion_default_count: usize,
    default_locale: Locale,
    metrics: MetricsTracker,
}

impl ContentSearchTools {
    /// Create search tools over `catalog`.
    ///
    /// # Arguments
    /// * `catalog` - Localized content to build corpora from
    /// * `default_locale` - Locale used when a request names none
    /// * `ranking` - Field weights and result cutoff
    /// * `suggestion_default_count` - Suggestions shown for an empty query
    /// * `cache_ttl_secs` - Corpus cache time-to-live in seconds
    pub fn new(
        catalog: Arc<Catalog>,
        default_locale: Locale,
        ranking: RankingOptions,
        suggestion_default_count: usize,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            catalog,
            cache: CorpusCache::new(cache_ttl_secs),
            ranking,
            suggestion_default_count,
            default_locale,
            metrics: MetricsTracker::new(),
        }
    }

    /// Rank the corpus for the requested locale.
    ///
    /// An empty query is not an error; it yields no results.
    pub fn search(&self, params: SearchParams) -> SearchResult<SearchResponse> {
        let timer = Timer::new("search");
        let (corpus, from_cache) = self.corpus_for(params.locale.as_ref())?;

        let ranking = match params.max_results {
            Some(max) => self.ranking.with_max_results(max),
            None => self.ranking,
        };
        let results = corpus.search(&params.query, &ranking);

        self.metrics
            .track_search_query(corpus.locale().as_str(), timer.finish(), results.len());

        Ok(SearchResponse {
            locale: corpus.locale().clone(),
            results,
            from_cache,
            corpus_size: corpus.len(),
        })
    }

    /// Filter the locale's suggestion candidates by `query`.
    pub fn suggest(&self, params: SuggestParams) -> SearchResult<SuggestResponse> {
        let (corpus, _) = self.corpus_for(params.locale.as_ref())?;
        let suggestions = filter_suggestions_with(
            &params.query,
            corpus.suggestions(),
            self.suggestion_default_count,
        );

        self.metrics
            .track_suggestion_query(corpus.locale().as_str(), suggestions.len());

        Ok(SuggestResponse {
            locale: corpus.locale().clone(),
            suggestions,
        })
    }

    /// Look up a single record.
    pub fn get(&self, id: &str, locale: Option<&Locale>) -> SearchResult<ContentRecord> {
        let (corpus, _) = self.corpus_for(locale)?;
        corpus
            .get(id)
            .cloned()
            .ok_or_else(|| SearchError::NotFound(id.to_string()))
    }

    /// Records newest first, optionally of one type.
    pub fn list(&self, params: ListParams) -> SearchResult<Vec<ContentRecord>> {
        let (corpus, _) = self.corpus_for(params.locale.as_ref())?;
        let limit = params.limit.unwrap_or(usize::MAX);
        Ok(corpus
            .list(params.content_type, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Locales the catalog publishes.
    pub fn locales(&self) -> &[Locale] {
        &self.catalog.locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// The corpus for `locale`, built and cached on first use.
    ///
    /// Returns the corpus and whether it was served from cache.
    pub fn corpus_for(&self, locale: Option<&Locale>) -> SearchResult<(Arc<Corpus>, bool)> {
        let requested = locale.unwrap_or(&self.default_locale);
        let resolved = self.catalog.resolve_locale(requested)?;

        if let Some(corpus) = self.cache.get(&resolved) {
            self.metrics.track_cache_access(resolved.as_str(), true);
            return Ok((corpus, true));
        }
        self.metrics.track_cache_access(resolved.as_str(), false);

        self.cache.purge_expired();

        let timer = Timer::new("build_corpus");
        let corpus = Arc::new(Corpus::build(&self.catalog, &resolved).map_err(|e| {
            tracing::error!(locale = %resolved, error = %e, "Failed to build corpus");
            SearchError::from(e)
        })?);
        self.metrics
            .track_corpus_build(resolved.as_str(), timer.finish(), corpus.len());

        self.cache.insert(Arc::clone(&corpus));
        Ok((corpus, false))
    }

    /// Check that `catalog` can replace the current one.
    ///
    /// The configured default locale must resolve and every published
    /// locale must build. Failures are server-side and come back as
    /// `CatalogRejected`.
    pub fn validate_catalog(&self, catalog: &Catalog) -> SearchResult<()> {
        let reject = |e| {
            tracing::error!(error = %e, "Replacement catalog rejected");
            SearchError::CatalogRejected(e)
        };

        catalog.resolve_locale(&self.default_locale).map_err(reject)?;
        for locale in &catalog.locales {
            Corpus::build(catalog, locale).map_err(reject)?;
        }

        Ok(())
    }

    /// Swap in a new catalog; every cached corpus is discarded.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.cache.clear();
        tracing::info!(entries = self.catalog.len(), "Catalog replaced");
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Drop every cached corpus so the next request rebuilds from the catalog.
    pub fn invalidate_cache(&self) {
        self.cache.clear();
        tracing::debug!("Corpus cache invalidated");
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache.ttl().as_secs()
    }
}
