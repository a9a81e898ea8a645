//! Plain-text excerpts for listings and feeds.

use super::Document;
use crate::log;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Characters of plain text kept before the ellipsis.
pub const EXCERPT_LENGTH: usize = 100;

/// Appended to every excerpt, even when the text was shorter.
pub const ELLIPSIS: &str = "...";

/// Comments first, so a `>` inside one does not end the match early.
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Excerpt of a document, or `None` (with a warning) if it has no content.
pub fn extract_excerpt(doc: &Document) -> Option<String> {
    match doc.content() {
        Ok(html) => Some(excerpt_from_html(html)),
        Err(err) => {
            log!("warn"; "failed to extract excerpt: {err}");
            None
        }
    }
}

/// Strip tags, keep the first [`EXCERPT_LENGTH`] characters, trim, collapse
/// whitespace runs and append [`ELLIPSIS`].
///
/// Words may be cut in half; existing listings depend on this exact output.
pub fn excerpt_from_html(html: &str) -> String {
    let text = MARKUP_TAG.replace_all(html, "");
    let head: String = text.chars().take(EXCERPT_LENGTH).collect();

    // a run keeps its last character, so "a \n b" becomes "a b"
    let mut excerpt = WHITESPACE_RUN
        .replace_all(head.trim(), |caps: &Captures| {
            caps[0].chars().last().map(String::from).unwrap_or_default()
        })
        .into_owned();
    excerpt.push_str(ELLIPSIS);
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_strips_tags() {
        let html = r#"<h1 class="title">Grid</h1><p>Use <code>display: grid</code>.</p>"#;
        assert_eq!(excerpt_from_html(html), "GridUse display: grid....");
    }

    #[test]
    fn test_excerpt_strips_comments() {
        assert_eq!(excerpt_from_html("<!-- a > b --><p>Tip</p>"), "Tip...");
        assert_eq!(excerpt_from_html("<p>x</p><!--\n note > more\n-->y"), "xy...");
    }

    #[test]
    fn test_excerpt_trims_and_collapses_whitespace() {
        let html = "<p>\n  Hello   world \n</p>\n<p>again</p>";
        assert_eq!(excerpt_from_html(html), "Hello world\nagain...");
    }

    #[test]
    fn test_excerpt_cuts_mid_word() {
        let body = "abcdefghij".repeat(12);
        let excerpt = excerpt_from_html(&format!("<p>{body}</p>"));
        assert_eq!(excerpt, format!("{}...", &body[..100]));
    }

    #[test]
    fn test_excerpt_counts_characters_before_trimming() {
        // leading whitespace counts towards the 100 characters
        let html = format!("{}{}", " ".repeat(95), "abcdefghij");
        assert_eq!(excerpt_from_html(&html), "abcde...");
    }

    #[test]
    fn test_excerpt_multibyte() {
        let body = "ü".repeat(150);
        let excerpt = excerpt_from_html(&body);
        assert_eq!(excerpt.chars().count(), 103);
    }

    #[test]
    fn test_excerpt_empty_content() {
        assert_eq!(excerpt_from_html(""), "...");
    }

    #[test]
    fn test_excerpt_length_and_no_markup() {
        let samples = [
            "<p>short</p>".to_string(),
            "<div><a href=\"/x\">link</a> text</div>".repeat(20),
            "plain text without markup but quite long ".repeat(5),
            "<img src=\"a.png\" alt=\"b\"><br/><span>\t\t</span>".into(),
        ];
        for html in samples {
            let excerpt = extract_excerpt(&Document::new("./src/posts/x.md", Some(html.clone())))
                .unwrap();
            let text = excerpt.strip_suffix(ELLIPSIS).unwrap();
            assert!(text.chars().count() <= EXCERPT_LENGTH, "too long for {html}");
            assert!(!MARKUP_TAG.is_match(text), "markup left for {html}");
        }
    }

    #[test]
    fn test_extract_excerpt_missing_content() {
        assert_eq!(extract_excerpt(&Document::new("./src/posts/x.md", None)), None);
    }
}
