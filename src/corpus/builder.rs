//! Locale-specific corpus construction.
//!
//! A [`Corpus`] is built once per locale and never mutated afterwards. A
//! locale switch builds a new corpus; callers swap the whole value.

use super::catalog::Catalog;
use crate::domain::Locale;
use crate::error::{CorpusError, CorpusResult};
use crate::models::{ContentRecord, ContentType, RawContentRecord, ScoredResult, Suggestion};
use crate::search::{self, RankingOptions};
use chrono::NaiveDate;
use std::collections::HashSet;

/// The immutable set of searchable records for one locale.
#[derive(Debug, Clone)]
pub struct Corpus {
    locale: Locale,
    records: Vec<ContentRecord>,
    suggestions: Vec<Suggestion>,
}

impl Corpus {
    /// Build the corpus for `locale` from `catalog`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedLocale` if the catalog does not publish the locale
    /// - `MissingTranslation` if an entry has no title in the locale or the
    ///   catalog default
    /// - `InvalidRecord`, `UnknownContentType` or `DuplicateId` for
    ///   malformed entries
    pub fn build(catalog: &Catalog, locale: &Locale) -> CorpusResult<Self> {
        let locale = catalog.resolve_locale(locale)?;
        let fallback = &catalog.default_locale;

        let raw = catalog
            .entries
            .iter()
            .map(|entry| -> CorpusResult<RawContentRecord> {
                let title = entry.title.resolve(&locale, fallback).ok_or_else(|| {
                    CorpusError::MissingTranslation {
                        id: entry.id.clone(),
                        field: "title",
                        locale: locale.to_string(),
                    }
                })?;

                Ok(RawContentRecord {
                    id: Some(entry.id.clone()),
                    title: Some(title.to_string()),
                    excerpt: entry.excerpt.resolve(&locale, fallback).map(str::to_string),
                    content_type: Some(entry.content_type.clone()),
                    category: entry.category.resolve(&locale, fallback).map(str::to_string),
                    date: entry.date.clone(),
                })
            })
            .collect::<CorpusResult<Vec<_>>>()?;

        let trending: Vec<Suggestion> = catalog
            .trending
            .iter()
            .filter_map(|text| text.resolve(&locale, fallback))
            .map(Suggestion::trending)
            .collect();

        let mut corpus = Self::from_raw(locale, raw)?;
        corpus.suggestions = merge_suggestions(trending, &corpus.records);

        tracing::debug!(
            locale = %corpus.locale,
            records = corpus.records.len(),
            suggestions = corpus.suggestions.len(),
            "Corpus built"
        );

        Ok(corpus)
    }

    /// Validate raw records into a corpus.
    pub fn from_raw(locale: Locale, raw: Vec<RawContentRecord>) -> CorpusResult<Self> {
        let records = raw
            .into_iter()
            .map(ContentRecord::try_from)
            .collect::<CorpusResult<Vec<_>>>()?;
        Self::from_records(locale, records)
    }

    /// Wrap already-validated records, rejecting duplicate ids.
    pub fn from_records(locale: Locale, records: Vec<ContentRecord>) -> CorpusResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CorpusError::DuplicateId(record.id.to_string()));
            }
        }

        let suggestions = merge_suggestions(Vec::new(), &records);
        Ok(Self {
            locale,
            records,
            suggestions,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Records of one type, in catalog order.
    pub fn by_type(&self, content_type: ContentType) -> impl Iterator<Item = &ContentRecord> {
        self.records
            .iter()
            .filter(move |r| r.content_type == content_type)
    }

    /// Autocomplete candidates: trending queries, then record titles.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Rank this corpus against `query`.
    pub fn search(&self, query: &str, options: &RankingOptions) -> Vec<ScoredResult> {
        search::search_with(query, &self.records, options)
    }

    /// Records newest first, optionally restricted to one type.
    ///
    /// Undated records sort after dated ones; ties keep catalog order.
    pub fn list(&self, content_type: Option<ContentType>, limit: usize) -> Vec<&ContentRecord> {
        let mut listed: Vec<(Option<NaiveDate>, &ContentRecord)> = self
            .records
            .iter()
            .filter(|r| content_type.map_or(true, |t| r.content_type == t))
            .map(|r| (r.date.as_deref().and_then(parse_date), r))
            .collect();

        listed.sort_by(|(a, _), (b, _)| b.cmp(a));
        listed.into_iter().take(limit).map(|(_, r)| r).collect()
    }
}

/// Parse a display date leniently: `2024-03-12`, `2024-03` or `2024`.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d"))
        .ok()
}

fn merge_suggestions(trending: Vec<Suggestion>, records: &[ContentRecord]) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    trending
        .into_iter()
        .chain(records.iter().map(|r| Suggestion::content(r.title.clone())))
        .filter(|s| seen.insert(s.text.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;
    use crate::models::SuggestionKind;

    const CATALOG: &str = r#"{
        "default_locale": "en",
        "locales": ["en", "fr"],
        "trending": [
            { "en": "Hotel openings", "fr": "Ouvertures d'hôtels" },
            { "en": "Keynotes" }
        ],
        "entries": [
            {
                "id": "blog-1",
                "type": "blog",
                "date": "2023-04-02",
                "title": { "en": "Hotel Management", "fr": "Gestion hôtelière" },
                "excerpt": { "en": "<p>Running a <b>tight</b> ship</p>" },
                "category": { "en": "Operations", "fr": "Opérations" }
            },
            {
                "id": "talk-1",
                "type": "speaking",
                "date": "2024",
                "title": { "en": "Keynotes" }
            },
            {
                "id": "award-1",
                "type": "award",
                "title": { "en": "Hotelier of the Year", "fr": "Hôtelier de l'année" }
            }
        ]
    }"#;

    fn locale(tag: &str) -> Locale {
        Locale::new(tag).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_json_str(CATALOG).unwrap()
    }

    #[test]
    fn test_build_resolves_locale_text() {
        let corpus = Corpus::build(&catalog(), &locale("fr")).unwrap();
        assert_eq!(corpus.locale(), &locale("fr"));
        assert_eq!(corpus.len(), 3);

        let blog = corpus.get("blog-1").unwrap();
        assert_eq!(blog.title, "Gestion hôtelière");
        assert_eq!(blog.category.as_deref(), Some("Opérations"));
        // Excerpt falls back to the default locale, with markup stripped
        assert_eq!(blog.excerpt, "Running a tight ship");

        assert_eq!(corpus.get("talk-1").unwrap().title, "Keynotes");
    }

    #[test]
    fn test_build_maps_regional_locale() {
        let corpus = Corpus::build(&catalog(), &locale("fr-CA")).unwrap();
        assert_eq!(corpus.locale(), &locale("fr"));
    }

    #[test]
    fn test_build_unsupported_locale() {
        let err = Corpus::build(&catalog(), &locale("ja")).unwrap_err();
        assert!(matches!(err, CorpusError::UnsupportedLocale(_)));
    }

    #[test]
    fn test_build_missing_title() {
        let catalog = Catalog::from_json_str(
            r#"{ "locales": ["en", "fr"], "entries": [
                { "id": "x", "type": "blog", "title": { "fr": "Seulement" } }
            ] }"#,
        )
        .unwrap();

        let err = Corpus::build(&catalog, &locale("en")).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MissingTranslation { ref id, field: "title", .. } if id == "x"
        ));
        assert!(Corpus::build(&catalog, &locale("fr")).is_ok());
    }

    #[test]
    fn test_build_rejects_unknown_type_and_duplicates() {
        let bad_type = Catalog::from_json_str(
            r#"{ "entries": [{ "id": "x", "type": "podcast", "title": { "en": "T" } }] }"#,
        )
        .unwrap();
        assert!(matches!(
            Corpus::build(&bad_type, &locale("en")),
            Err(CorpusError::UnknownContentType(_))
        ));

        let duplicate = Catalog::from_json_str(
            r#"{ "entries": [
                { "id": "x", "type": "blog", "title": { "en": "A" } },
                { "id": "x", "type": "blog", "title": { "en": "B" } }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            Corpus::build(&duplicate, &locale("en")),
            Err(CorpusError::DuplicateId(id)) if id == "x"
        ));
    }

    #[test]
    fn test_suggestions_trending_first_and_deduplicated() {
        let corpus = Corpus::build(&catalog(), &locale("en")).unwrap();
        let texts: Vec<_> = corpus.suggestions().iter().map(|s| s.text.as_str()).collect();

        assert_eq!(
            texts,
            vec!["Hotel openings", "Keynotes", "Hotel Management", "Hotelier of the Year"]
        );
        assert_eq!(corpus.suggestions()[0].kind, Some(SuggestionKind::Trending));
        assert_eq!(corpus.suggestions()[2].kind, Some(SuggestionKind::Content));
    }

    #[test]
    fn test_by_type() {
        let corpus = Corpus::build(&catalog(), &locale("en")).unwrap();
        let awards: Vec<_> = corpus.by_type(ContentType::Award).collect();
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].id.as_str(), "award-1");
        assert_eq!(corpus.by_type(ContentType::Testimonial).count(), 0);
    }

    #[test]
    fn test_list_newest_first_undated_last() {
        let corpus = Corpus::build(&catalog(), &locale("en")).unwrap();
        let ids: Vec<_> = corpus.list(None, 10).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["talk-1", "blog-1", "award-1"]);

        let limited = corpus.list(Some(ContentType::Blog), 10);
        assert_eq!(limited.len(), 1);
        assert_eq!(corpus.list(None, 1).len(), 1);
    }

    #[test]
    fn test_search_uses_locale_text() {
        let catalog = catalog();
        let en = Corpus::build(&catalog, &locale("en")).unwrap();
        let fr = Corpus::build(&catalog, &locale("fr")).unwrap();

        assert_eq!(en.search("management", &RankingOptions::default()).len(), 1);
        assert!(fr.search("management", &RankingOptions::default()).is_empty());
        assert_eq!(fr.search("gestion", &RankingOptions::default()).len(), 1);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let record =
            ContentRecord::new(RecordId::new("a").unwrap(), "Title", ContentType::Project);
        let err = Corpus::from_records(locale("en"), vec![record.clone(), record]).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId(_)));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-03-12"), NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(parse_date("2024-03"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_date("2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_date("Spring 2024"), None);
    }
}
