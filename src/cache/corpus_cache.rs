//! Locale-keyed corpus cache with TTL.
//!
//! Built corpora are shared as `Arc<Corpus>`. Replacing an entry swaps the
//! `Arc`, so a reader holding the previous corpus keeps a complete, valid
//! snapshot until it drops it.

use crate::corpus::Corpus;
use crate::domain::Locale;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    corpus: Arc<Corpus>,
    built_at: Instant,
}

/// A thread-safe cache of built corpora, one per locale.
///
/// Cloning is cheap and clones share the same storage. Entries older than
/// the TTL are ignored by [`get`](Self::get) and dropped by
/// [`purge_expired`](Self::purge_expired), which runs before each rebuild.
#[derive(Debug, Clone)]
pub struct CorpusCache {
    entries: Arc<RwLock<HashMap<Locale, CacheEntry>>>,
    ttl: Duration,
}

impl CorpusCache {
    /// Create a cache whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_seconds))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// The live corpus for `locale`, if one has been built within the TTL.
    pub fn get(&self, locale: &Locale) -> Option<Arc<Corpus>> {
        let entries = self.entries.read().ok()?;
        entries
            .get(locale)
            .filter(|entry| entry.built_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.corpus))
    }

    /// Store `corpus` under its own locale, replacing any previous corpus.
    pub fn insert(&self, corpus: Arc<Corpus>) {
        let entry = CacheEntry {
            built_at: Instant::now(),
            corpus,
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(entry.corpus.locale().clone(), entry);
        }
    }

    /// Drop every corpus.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Remove entries older than the TTL.
    pub fn purge_expired(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| entry.built_at.elapsed() < self.ttl);
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
