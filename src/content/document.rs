//! Rendered documents and the render manifest.
//!
//! The upstream renderer writes `manifest.json` at the root of its output:
//!
//! ```json
//! [
//!   {
//!     "input": "./src/tips/en/grid.md",
//!     "output": "tips/en/grid/index.html",
//!     "url": "/tips/en/grid/",
//!     "title": "CSS grid in one minute",
//!     "date": "2024-05-01T00:00:00Z",
//!     "tags": ["css", "browser:chrome"],
//!     "authors": "Alice, Bob"
//!   }
//! ]
//! ```

use super::ContentError;
use crate::{filters::Authors, log};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Manifest file name inside the rendered tree.
pub const MANIFEST_FILE: &str = "manifest.json";

/// A single rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Source path as seen by the renderer, e.g. `./src/tips/en/grid.md`.
    pub input: String,

    /// Rendered HTML path, relative to the rendered tree.
    pub output: PathBuf,

    /// Public URL of the page.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Publication date.
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub authors: Option<Authors>,

    /// Rendered HTML. `None` when the renderer produced nothing.
    #[serde(skip)]
    pub content: Option<String>,
}

impl Document {
    /// Create a document from a source path and its rendered HTML.
    pub fn new(input: impl Into<String>, content: Option<String>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::new(),
            url: String::new(),
            title: None,
            date: DateTime::<Utc>::UNIX_EPOCH,
            tags: Vec::new(),
            authors: None,
            content,
        }
    }

    /// Rendered HTML, or [`ContentError::MissingContent`].
    pub fn content(&self) -> Result<&str, ContentError> {
        self.content
            .as_deref()
            .ok_or_else(|| ContentError::MissingContent {
                input: self.input.clone(),
            })
    }
}

/// Read the manifest of a rendered tree and load each document's HTML.
///
/// A manifest entry whose HTML file is absent yields a document without
/// content; the extractors report it and the build carries on.
pub fn load_documents(rendered: &Path) -> Result<Vec<Document>> {
    let manifest = rendered.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&manifest)
        .with_context(|| format!("reading render manifest `{}`", manifest.display()))?;
    let mut documents: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing render manifest `{}`", manifest.display()))?;

    for doc in &mut documents {
        let path = rendered.join(&doc.output);
        doc.content = match fs::read_to_string(&path) {
            Ok(html) => Some(html),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log!("warn"; "rendered file missing: {}", path.display());
                None
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading `{}`", path.display()));
            }
        };
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_content_missing() {
        let doc = Document::new("./src/posts/a.md", None);
        assert_eq!(
            doc.content(),
            Err(ContentError::MissingContent {
                input: "./src/posts/a.md".into()
            })
        );
    }

    #[test]
    fn test_document_content_present() {
        let doc = Document::new("./src/posts/a.md", Some("<p>hi</p>".into()));
        assert_eq!(doc.content(), Ok("<p>hi</p>"));
    }

    #[test]
    fn test_load_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("tips/en/grid")).unwrap();
        fs::write(root.join("tips/en/grid/index.html"), "<p>grid</p>").unwrap();
        fs::write(
            root.join(MANIFEST_FILE),
            r#"[
                {
                    "input": "./src/tips/en/grid.md",
                    "output": "tips/en/grid/index.html",
                    "url": "/tips/en/grid/",
                    "title": "Grid",
                    "date": "2024-05-01T10:00:00.000Z",
                    "tags": ["css", "browser:chrome"],
                    "authors": "Alice, Bob"
                },
                {
                    "input": "./src/posts/gone.md",
                    "output": "posts/gone/index.html",
                    "date": "2024-04-01T00:00:00Z"
                }
            ]"#,
        )
        .unwrap();

        let docs = load_documents(root).unwrap();
        assert_eq!(docs.len(), 2);

        assert_eq!(docs[0].content.as_deref(), Some("<p>grid</p>"));
        assert_eq!(docs[0].title.as_deref(), Some("Grid"));
        assert_eq!(
            docs[0].date,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(docs[0].tags, vec!["css", "browser:chrome"]);
        assert_eq!(docs[0].authors, Some(Authors::Joined("Alice, Bob".into())));

        assert!(docs[1].content.is_none());
        assert!(docs[1].tags.is_empty());
    }

    #[test]
    fn test_load_documents_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_documents(dir.path()).unwrap_err();
        assert!(err.to_string().contains(MANIFEST_FILE));
    }

    #[test]
    fn test_load_documents_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"[{"input": "a.md", "output": "a.html", "date": "2024-01-01T00:00:00Z", "layout": "x"}]"#,
        )
        .unwrap();
        assert!(load_documents(dir.path()).is_err());
    }
}
