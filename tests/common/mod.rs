//! Shared fixtures for integration tests.

#![allow(dead_code)]

use portfolio_search::models::{ContentRecord, ContentType};
use portfolio_search::RecordId;

/// Build a record with the given fields.
pub fn record(
    id: &str,
    title: &str,
    excerpt: &str,
    content_type: ContentType,
    category: Option<&str>,
) -> ContentRecord {
    let record =
        ContentRecord::new(RecordId::new(id).unwrap(), title, content_type).with_excerpt(excerpt);
    match category {
        Some(category) => record.with_category(category),
        None => record,
    }
}

/// A small hand-written corpus with overlapping vocabulary.
pub fn sample_corpus() -> Vec<ContentRecord> {
    vec![
        record("b1", "Hotel Management", "", ContentType::Blog, None),
        record(
            "p1",
            "Pre-Opening Operations",
            "hotel strategy",
            ContentType::Project,
            Some("Operations"),
        ),
        record(
            "s1",
            "Keynote on Luxury",
            "hospitality trends",
            ContentType::Speaking,
            Some("Hotel Conference"),
        ),
        record(
            "a1",
            "Hotelier of the Year",
            "award for hotel leadership",
            ContentType::Award,
            Some("Recognition"),
        ),
        record(
            "t1",
            "A leader who builds leaders",
            "former team member",
            ContentType::Testimonial,
            Some("Leadership"),
        ),
    ]
}
