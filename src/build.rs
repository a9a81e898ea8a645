//! Site post-processing orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_documents() ──► manifest.json + rendered HTML
//!     │
//!     ├── process_documents() ─┐  (rayon::join)
//!     │     rewrite tips links  │
//!     │     write HTML          │
//!     │     summarize           │
//!     ├── copy_passthrough() ───┘
//!     │
//!     ├── write_index() ──► pages.json
//!     ├── build_feed()  ──► feed.xml
//!     └── run_indexer() ──► only when BUILD_ENV matches
//! ```

use crate::{
    config::SiteConfig,
    content::{Document, TipsRewriter, load_documents},
    feed::build_feed,
    filters::AuthorRegistry,
    index::{PageSummary, write_index},
    log,
    passthrough::copy_passthrough,
    search::run_indexer,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{borrow::Cow, fs, path::Path};

/// Post-process the rendered site into the output directory.
///
/// If `config.build.clean` is true, removes the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("cleaning `{}`", output.display()))?;
    }
    fs::create_dir_all(output)?;

    let registry = AuthorRegistry::load(&config.build.authors)?;
    let rewriter = TipsRewriter::new(&config.build.tips)?;
    let documents = load_documents(&config.build.rendered)?;
    log!(
        "build";
        "processing {} documents, {} registered authors",
        documents.len(),
        registry.len()
    );

    let (pages, assets) = rayon::join(
        || process_documents(&documents, &rewriter, &registry, output),
        || copy_passthrough(config),
    );
    let pages = pages?;
    assets?;

    write_index(&documents, pages, output)?;
    build_feed(config, &documents)?;
    run_indexer(config)?;

    log!("build"; "done: {}", output.display());
    Ok(())
}

fn process_documents(
    documents: &[Document],
    rewriter: &TipsRewriter,
    registry: &AuthorRegistry,
    output: &Path,
) -> Result<Vec<PageSummary>> {
    documents
        .par_iter()
        .map(|doc| process_document(doc, rewriter, registry, output))
        .collect()
}

/// Write one document's final HTML and summarize it.
///
/// Summaries are taken from the HTML as rendered, before link rewriting.
fn process_document(
    doc: &Document,
    rewriter: &TipsRewriter,
    registry: &AuthorRegistry,
    output: &Path,
) -> Result<PageSummary> {
    if let Some(html) = rewriter.rewrite_document(doc) {
        let dest = output.join(&doc.output);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, html.as_bytes())
            .with_context(|| format!("writing `{}`", dest.display()))?;

        if matches!(html, Cow::Owned(_)) {
            log!("tips"; "rewrote links in {}", doc.input);
        }
    }

    Ok(PageSummary::from_document(doc, registry))
}
