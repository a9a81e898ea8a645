//! Leading image scrape.

use super::Document;
use crate::log;
use regex::Regex;
use std::{fmt, sync::LazyLock};

/// First `<img src="…" alt="…"` with exactly that attribute order and
/// spacing, both values non-empty.
static IMAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img src="([^"]+)" alt="([^"]+)""#).unwrap());

/// `src`/`alt` pair of the first image in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingImage<'a> {
    pub src: &'a str,
    pub alt: &'a str,
}

impl fmt::Display for LeadingImage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the closing tag is kept for byte-compatible listing pages
        write!(
            f,
            r#"<img src="{}" alt="{}" loading="lazy"></img>"#,
            self.src, self.alt
        )
    }
}

/// Find the first image tag of an HTML fragment.
pub fn leading_image(html: &str) -> Option<LeadingImage<'_>> {
    let caps = IMAGE_TAG.captures(html)?;
    Some(LeadingImage {
        src: caps.get(1)?.as_str(),
        alt: caps.get(2)?.as_str(),
    })
}

/// Normalized leading image tag of a document.
///
/// Returns an empty string when there is no image, and also (with a
/// warning) when the document has no content.
pub fn extract_image(doc: &Document) -> String {
    match doc.content() {
        Ok(html) => leading_image(html)
            .map(|image| image.to_string())
            .unwrap_or_default(),
        Err(err) => {
            log!("warn"; "failed to extract image: {err}");
            String::new()
        }
    }
}
