//! End-to-end tests for the service stack behind the MCP tools.
//!
//! These build the same tools/service pair `main` wires into the server and
//! drive it through the public `SearchService` trait, including catalog
//! reloads from a file on disk.

use portfolio_search::corpus::Catalog;
use portfolio_search::domain::Locale;
use portfolio_search::error::{CorpusError, SearchError};
use portfolio_search::search::RankingOptions;
use portfolio_search::services::{SearchService, SearchServiceImpl};
use portfolio_search::tools::ContentSearchTools;
use portfolio_search::PortfolioSearchServer;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

const SMALL_CATALOG: &str = r#"{
  "default_locale": "en",
  "locales": ["en"],
  "trending": [{ "en": "Spa design" }],
  "entries": [
    {
      "id": "blog-spa",
      "type": "blog",
      "date": "2025-01-10",
      "title": { "en": "Designing a Destination Spa" },
      "excerpt": { "en": "<em>Treatment rooms</em> that sell themselves." },
      "category": { "en": "Wellness" }
    }
  ]
}"#;

fn tools(catalog: Catalog) -> ContentSearchTools {
    ContentSearchTools::new(
        Arc::new(catalog),
        Locale::default(),
        RankingOptions::default(),
        6,
        300,
    )
}

fn service(catalog: Catalog, path: Option<PathBuf>) -> SearchServiceImpl {
    SearchServiceImpl::new(Arc::new(RwLock::new(tools(catalog))), path)
}

fn catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_server_constructs_over_builtin_catalog() {
    let server = PortfolioSearchServer::new(tools(Catalog::builtin().unwrap()), None);
    let _clone = server.clone();
}

#[tokio::test]
async fn test_search_then_cached_search() {
    let service = service(Catalog::builtin().unwrap(), None);

    let first = service.search("hotel".into(), None, None).await.unwrap();
    let second = service.search("hotel".into(), None, None).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.results, second.results);
    assert!(first.results.len() <= 10);
}

#[tokio::test]
async fn test_regional_locale_falls_back_to_language() {
    let service = service(Catalog::builtin().unwrap(), None);

    let response = service
        .search("hôtelier".into(), Some("fr-CA".into()), None)
        .await
        .unwrap();

    assert_eq!(response.locale.as_str(), "fr");
    assert_eq!(
        response.results[0].record.id.as_str(),
        "award-hotelier-of-the-year"
    );
}

#[tokio::test]
async fn test_unpublished_locale_is_client_error() {
    let service = service(Catalog::builtin().unwrap(), None);

    let err = service
        .search("hotel".into(), Some("de".into()), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SearchError::Corpus(CorpusError::UnsupportedLocale(_))
    ));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_list_content_newest_first() {
    let service = service(Catalog::builtin().unwrap(), None);

    let blogs = service
        .list_content(None, Some("blog".into()), Some(2))
        .await
        .unwrap();

    let ids: Vec<_> = blogs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["blog-pre-opening-playbook", "blog-revpar-after-renovation"]);
}

#[tokio::test]
async fn test_reload_catalog_replaces_corpus() {
    let file = catalog_file(SMALL_CATALOG);
    let service = service(
        Catalog::builtin().unwrap(),
        Some(file.path().to_path_buf()),
    );

    // Warm the cache with the built-in catalog
    let before = service.search("spa".into(), None, None).await.unwrap();
    assert!(before.results.is_empty());

    let entries = service.reload_catalog().await.unwrap();
    assert_eq!(entries, 1);

    let after = service.search("spa".into(), None, None).await.unwrap();
    assert!(!after.from_cache);
    assert_eq!(after.corpus_size, 1);
    assert_eq!(after.results[0].record.excerpt, "Treatment rooms that sell themselves.");
    assert_eq!(after.results[0].relevance_score, 10);

    let suggestions = service.suggest(String::new(), None).await.unwrap();
    assert_eq!(suggestions.suggestions[0].text, "Spa design");
}

#[tokio::test]
async fn test_reload_with_bad_catalog_keeps_previous() {
    let file = catalog_file("{ not json");
    let service = service(
        Catalog::builtin().unwrap(),
        Some(file.path().to_path_buf()),
    );

    let err = service.reload_catalog().await.unwrap_err();
    assert!(matches!(err, SearchError::Corpus(CorpusError::JsonError(_))));
    assert!(!err.is_client_error());

    let response = service.search("hotel".into(), None, None).await.unwrap();
    assert!(!response.results.is_empty());
}

#[tokio::test]
async fn test_reload_without_path_is_rejected() {
    let service = service(Catalog::builtin().unwrap(), None);

    let err = service.reload_catalog().await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidParameters(_)));
}

#[tokio::test]
async fn test_reload_with_unbuildable_catalog_keeps_previous() {
    let file = catalog_file(r#"{"entries":[{"id":"x","type":"podcast","title":{"en":"Hotel"}}]}"#);
    let service = service(
        Catalog::builtin().unwrap(),
        Some(file.path().to_path_buf()),
    );

    let before = service.search("hotel".into(), None, None).await.unwrap();

    let err = service.reload_catalog().await.unwrap_err();
    assert!(matches!(
        err,
        SearchError::CatalogRejected(CorpusError::UnknownContentType(_))
    ));
    assert!(!err.is_client_error());

    let after = service.search("hotel".into(), None, None).await.unwrap();
    assert_eq!(after.results, before.results);
}
