//! Search metrics tracking.
//!
//! Lock-free counters for the search server's hot paths, with structured
//! `tracing` events emitted alongside each update.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics for the search server.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    search_queries_total: Arc<AtomicU64>,
    zero_result_searches_total: Arc<AtomicU64>,
    suggestion_queries_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
    corpus_builds_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            search_queries_total: Arc::new(AtomicU64::new(0)),
            zero_result_searches_total: Arc::new(AtomicU64::new(0)),
            suggestion_queries_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            corpus_builds_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a ranked search.
    pub fn track_search_query(&self, locale: &str, duration_ms: u128, result_count: usize) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);
        if result_count == 0 {
            self.zero_result_searches_total
                .fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            locale = %locale,
            duration_ms = duration_ms,
            result_count = result_count,
            "Search query completed"
        );
    }

    /// Track an autocomplete lookup.
    pub fn track_suggestion_query(&self, locale: &str, result_count: usize) {
        self.suggestion_queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            locale = %locale,
            result_count = result_count,
            "Suggestion query completed"
        );
    }

    /// Track a corpus cache lookup.
    pub fn track_cache_access(&self, locale: &str, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(locale = %locale, "Corpus cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(locale = %locale, "Corpus cache miss");
        }
    }

    /// Track a corpus build.
    pub fn track_corpus_build(&self, locale: &str, duration_ms: u128, records: usize) {
        self.corpus_builds_total.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            locale = %locale,
            duration_ms = duration_ms,
            records = records,
            "Corpus built"
        );
    }

    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    pub fn zero_result_searches_total(&self) -> u64 {
        self.zero_result_searches_total.load(Ordering::Relaxed)
    }

    pub fn suggestion_queries_total(&self) -> u64 {
        self.suggestion_queries_total.load(Ordering::Relaxed)
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    pub fn corpus_builds_total(&self) -> u64 {
        self.corpus_builds_total.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0 to 1.0).
    pub fn cache_hit_rate(&self) -> f64 {
        ratio(
            self.cache_hits_total(),
            self.cache_hits_total() + self.cache_misses_total(),
        )
    }

    /// Share of searches that found nothing (0.0 to 1.0).
    pub fn zero_result_rate(&self) -> f64 {
        ratio(self.zero_result_searches_total(), self.search_queries_total())
    }

    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Search Queries: {}\n\
             Zero-Result Searches: {} ({:.2}%)\n\
             Suggestion Queries: {}\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%\n\
             Corpus Builds: {}",
            self.search_queries_total(),
            self.zero_result_searches_total(),
            self.zero_result_rate() * 100.0,
            self.suggestion_queries_total(),
            self.cache_hits_total(),
            self.cache_misses_total(),
            self.cache_hit_rate() * 100.0,
            self.corpus_builds_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
