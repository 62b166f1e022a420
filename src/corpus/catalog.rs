//! Localized content catalog.
//!
//! A catalog is the locale-independent source a corpus is built from. Each
//! entry carries its display strings per locale; the corpus builder resolves
//! them for one locale at a time.

use crate::domain::Locale;
use crate::error::{CorpusError, CorpusResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

static BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Text keyed by locale, e.g. `{ "en": "Awards", "fr": "Prix" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Resolve text for `locale`.
    ///
    /// Lookup order: the exact tag, its primary language (`fr` for `fr-CA`),
    /// then `fallback`. Blank strings count as missing.
    pub fn resolve(&self, locale: &Locale, fallback: &Locale) -> Option<&str> {
        let lookup = |key: &Locale| {
            self.0
                .get(key)
                .map(String::as_str)
                .filter(|text| !text.trim().is_empty())
        };

        lookup(locale)
            .or_else(|| {
                Locale::new(locale.language())
                    .ok()
                    .and_then(|language| lookup(&language))
            })
            .or_else(|| lookup(fallback))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .filter_map(|(tag, text)| Locale::new(tag).ok().map(|l| (l, text.to_string())))
                .collect(),
        )
    }
}

/// One catalog entry before localization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: String,

    /// Content type label; validated when the corpus is built
    #[serde(rename = "type")]
    pub content_type: String,

    #[serde(default)]
    pub date: Option<String>,

    pub title: LocalizedText,

    #[serde(default)]
    pub excerpt: LocalizedText,

    #[serde(default)]
    pub category: LocalizedText,
}

/// The full set of portfolio content in every published locale.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub default_locale: Locale,

    #[serde(default)]
    pub locales: Vec<Locale>,

    /// Curated queries offered before the user types
    #[serde(default)]
    pub trending: Vec<LocalizedText>,

    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> CorpusResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        if !catalog.locales.contains(&catalog.default_locale) {
            catalog.locales.insert(0, catalog.default_locale.clone());
        }
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "Read catalog file");
        Self::from_json_str(&json)
    }

    /// Map a requested locale onto one the catalog publishes.
    ///
    /// An exact match wins; otherwise a published locale with the same
    /// primary language is used (`fr-CA` → `fr`, or `fr` → `fr-CA`).
    pub fn resolve_locale(&self, requested: &Locale) -> CorpusResult<Locale> {
        if self.locales.contains(requested) {
            return Ok(requested.clone());
        }

        self.locales
            .iter()
            .find(|l| l.language() == requested.language())
            .cloned()
            .ok_or_else(|| CorpusError::UnsupportedLocale(requested.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
