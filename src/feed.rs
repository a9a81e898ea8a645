//! rss feed generation.

use crate::{
    config::SiteConfig,
    content::{Document, extract_excerpt},
    filters::latest,
    log,
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build rss feed if enabled in config.
///
/// Nothing is written when no document has content.
pub fn build_feed(config: &SiteConfig, documents: &[Document]) -> Result<()> {
    if !config.build.rss.enable {
        return Ok(());
    }

    let feed = Feed::build(config, documents);
    if feed.documents.is_empty() {
        log!("feed"; "no documents with content, skipping {}", config.build.rss.path.display());
        return Ok(());
    }
    feed.write(config)
}

// ============================================================================
// Feed Implementation
// ============================================================================

struct Feed<'a> {
    config: &'a SiteConfig,
    documents: Vec<&'a Document>,
}

impl<'a> Feed<'a> {
    /// Documents without content are left out of the feed.
    fn build(config: &'a SiteConfig, documents: &'a [Document]) -> Self {
        let mut documents: Vec<_> = documents.iter().filter(|d| d.content.is_some()).collect();
        documents.sort_by(|a, b| b.date.cmp(&a.date));
        Self { config, documents }
    }

    fn into_xml(self) -> Result<String> {
        let base_url = self.config.base.url.as_deref().unwrap_or_default();
        let last_build = latest(self.documents.iter().copied())?.to_rfc2822();

        let items: Vec<_> = self
            .documents
            .iter()
            .map(|doc| document_to_item(doc, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(base_url)
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator("tipsite".to_string())
            .last_build_date(last_build)
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let path = config.build.output.join(&config.build.rss.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, xml)?;

        log!("feed"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn document_to_item(doc: &Document, config: &SiteConfig) -> rss::Item {
    let base_url = config.base.url.as_deref().unwrap_or_default();
    let link = format!("{}{}", base_url.trim_end_matches('/'), doc.url);
    let author = doc
        .authors
        .as_ref()
        .map(|authors| authors.names().join(", "))
        .filter(|names| !names.trim().is_empty());

    ItemBuilder::default()
        .title(doc.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(extract_excerpt(doc))
        .pub_date(doc.date.to_rfc2822())
        .author(normalize_rss_author(author, config))
        .build()
}

/// Normalize an author to the rss form `email@example.com (Name)`.
///
/// 1. Use the document authors if already in that form
/// 2. Otherwise combine `[base].email` with the authors (or `[base].author`)
/// 3. Without an email the element is left out
fn normalize_rss_author(author: Option<String>, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let name = author.unwrap_or_else(|| config.base.author.clone());
    if RE_VALID_AUTHOR.is_match(&name) {
        return Some(name);
    }

    let email = config.base.email.as_deref()?;
    Some(format!("{email} ({name})"))
}
