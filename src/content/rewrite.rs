//! Absolute links for tips pages.
//!
//! Tip sources are written with links that work in a local markdown preview
//! (`./other-tip.md`, `../../assets/img/x.png`). The deployed pages live at a
//! different depth, so both forms are rewritten to absolute site paths. Only
//! `href="` and `src="` attribute values are touched, never body text.

use super::Document;
use crate::config::TipsConfig;
use anyhow::{Context, Result};
use regex::{Captures, NoExpand, Regex};
use std::{
    borrow::Cow,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

/// `href="./<name>.md"` with an optional `#fragment`; dotted names are left alone.
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"href="\./([^".#]+)\.md(#[^"]*)?""##).unwrap());

/// Scoped rewriter for one locale of the tips subtree.
#[derive(Debug, Clone)]
pub struct TipsRewriter {
    scope: PathBuf,
    locale: String,
    asset_link: Regex,
    asset_target: String,
}

impl TipsRewriter {
    pub fn new(config: &TipsConfig) -> Result<Self> {
        let assets = config.assets.trim_matches('/');
        let asset_link = Regex::new(&format!(r#"src="\.\./\.\./{}/"#, regex::escape(assets)))
            .with_context(|| format!("invalid [build.tips.assets] `{assets}`"))?;

        Ok(Self {
            scope: without_cur_dir(&config.scope),
            locale: config.locale.clone(),
            asset_link,
            asset_target: format!(r#"src="/{assets}/"#),
        })
    }

    /// Whether a source path lies under the rewrite scope.
    pub fn in_scope(&self, input: &str) -> bool {
        without_cur_dir(Path::new(input)).starts_with(&self.scope)
    }

    /// Rewrite `html` if `input` is in scope; otherwise borrow it unchanged.
    ///
    /// Already-absolute links no longer match, so applying this twice is the
    /// same as applying it once.
    pub fn rewrite<'a>(&self, input: &str, html: &'a str) -> Cow<'a, str> {
        if !self.in_scope(input) {
            return Cow::Borrowed(html);
        }

        let linked = MARKDOWN_LINK.replace_all(html, |caps: &Captures| {
            let fragment = caps.get(2).map_or("", |m| m.as_str());
            format!(r#"href="/tips/{}/{}{fragment}""#, self.locale, &caps[1])
        });

        if !self.asset_link.is_match(&linked) {
            return linked;
        }
        Cow::Owned(
            self.asset_link
                .replace_all(&linked, NoExpand(&self.asset_target))
                .into_owned(),
        )
    }

    /// Rewritten HTML of a document, `None` if it has no content.
    pub fn rewrite_document<'a>(&self, doc: &'a Document) -> Option<Cow<'a, str>> {
        doc.content().ok().map(|html| self.rewrite(&doc.input, html))
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
