//! Page index handed to the templating layer.
//!
//! `pages.json` in the output directory:
//!
//! ```json
//! {
//!   "updated": "2024-05-01T10:00:00.000Z",
//!   "pages": [
//!     {
//!       "url": "/tips/en/grid/",
//!       "title": "Grid",
//!       "date": "2024-05-01T10:00:00.000Z",
//!       "excerpt": "Use display: grid...",
//!       "image": "<img src=\"/assets/img/grid.png\" alt=\"grid\" loading=\"lazy\"></img>",
//!       "authors": "<a href=\"https://alice.dev\">Alice</a>, Bob",
//!       "tags": ["css"],
//!       "browsers": ["chrome"]
//!     }
//!   ]
//! }
//! ```

use crate::{
    content::{Document, extract_excerpt, extract_image},
    filters::{AuthorRegistry, format_authors, format_timestamp, latest_date, partition_tags},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const INDEX_FILE: &str = "pages.json";

/// Derived values of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub url: String,
    pub title: Option<String>,
    pub date: String,
    pub excerpt: Option<String>,
    pub image: String,
    pub authors: String,
    pub tags: Vec<String>,
    pub browsers: Vec<String>,
}

impl PageSummary {
    pub fn from_document(doc: &Document, registry: &AuthorRegistry) -> Self {
        let (tags, browsers) = partition_tags(&doc.tags);
        Self {
            url: doc.url.clone(),
            title: doc.title.clone(),
            date: format_timestamp(doc.date),
            excerpt: extract_excerpt(doc),
            image: extract_image(doc),
            authors: doc
                .authors
                .as_ref()
                .map(|authors| format_authors(registry, authors))
                .unwrap_or_default(),
            tags: tags.into_iter().map(String::from).collect(),
            browsers: browsers.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct PageIndex<'a> {
    updated: String,
    pages: &'a [PageSummary],
}

/// Write `pages.json`, newest page first.
///
/// Fails on an empty collection: there is no meaningful `updated` value.
pub fn write_index(
    documents: &[Document],
    mut pages: Vec<PageSummary>,
    output: &Path,
) -> Result<PathBuf> {
    let updated = latest_date(documents)?;
    // fixed-width UTC timestamps sort lexicographically
    pages.sort_by(|a, b| b.date.cmp(&a.date));

    let json = serde_json::to_string_pretty(&PageIndex {
        updated,
        pages: &pages,
    })?;
    let path = output.join(INDEX_FILE);
    fs::write(&path, json).with_context(|| format!("writing `{}`", path.display()))?;

    log!("build"; "{} ({} pages)", INDEX_FILE, pages.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Authors;
    use chrono::{TimeZone, Utc};

    fn document(url: &str, day: u32, html: Option<&str>) -> Document {
        let mut doc = Document::new(format!("./src{url}.md"), html.map(String::from));
        doc.url = url.into();
        doc.date = Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap();
        doc
    }

    #[test]
    fn test_page_summary_from_document() {
        let registry: AuthorRegistry = [("Alice", "https://alice.dev")].into_iter().collect();
        let mut doc = document(
            "/tips/en/grid",
            1,
            Some(r#"<p>Grid <img src="/a.png" alt="grid"></p>"#),
        );
        doc.title = Some("Grid".into());
        doc.tags = vec!["css".into(), "browser:chrome".into()];
        doc.authors = Some(Authors::Joined("Alice, Bob".into()));

        let summary = PageSummary::from_document(&doc, &registry);
        assert_eq!(summary.url, "/tips/en/grid");
        assert_eq!(summary.title.as_deref(), Some("Grid"));
        assert_eq!(summary.date, "2024-05-01T00:00:00.000Z");
        assert_eq!(summary.excerpt.as_deref(), Some("Grid..."));
        assert_eq!(summary.image, r#"<img src="/a.png" alt="grid" loading="lazy"></img>"#);
        assert_eq!(summary.authors, r#"<a href="https://alice.dev">Alice</a>, Bob"#);
        assert_eq!(summary.tags, vec!["css"]);
        assert_eq!(summary.browsers, vec!["chrome"]);
    }

    #[test]
    fn test_page_summary_missing_content() {
        let summary =
            PageSummary::from_document(&document("/gone", 2, None), &AuthorRegistry::default());
        assert_eq!(summary.excerpt, None);
        assert_eq!(summary.image, "");
        assert_eq!(summary.authors, "");
    }

    #[test]
    fn test_write_index_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let docs = [document("/old", 1, Some("a")), document("/new", 9, Some("b"))];
        let pages = docs
            .iter()
            .map(|doc| PageSummary::from_document(doc, &AuthorRegistry::default()))
            .collect();

        let path = write_index(&docs, pages, dir.path()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(json["updated"], "2024-05-09T00:00:00.000Z");
        assert_eq!(json["pages"][0]["url"], "/new");
        assert_eq!(json["pages"][1]["url"], "/old");
    }

    #[test]
    fn test_write_index_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_index(&[], Vec::new(), dir.path()).is_err());
    }
}
