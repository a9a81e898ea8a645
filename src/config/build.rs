//! `[build]` section configuration.
//!
//! Contains the rendered-input and output locations, passthrough entries,
//! the tips rewrite scope and feed settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in site.toml - post-processing configuration.
///
/// # Example
/// ```toml
/// [build]
/// rendered = "_rendered"   # Output of the upstream renderer
/// output = "_site"         # Final site
/// passthrough = ["src/assets", "CNAME"]
///
/// [build.tips]
/// scope = "src/tips/en"
/// locale = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Source tree; passthrough entries under it are copied without this prefix.
    #[serde(default = "defaults::build::source")]
    #[educe(Default = defaults::build::source())]
    pub source: PathBuf,

    /// Rendered HTML tree containing `manifest.json`.
    #[serde(default = "defaults::build::rendered")]
    #[educe(Default = defaults::build::rendered())]
    pub rendered: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Author registry data file (JSON object of name → URL).
    #[serde(default = "defaults::build::authors")]
    #[educe(Default = defaults::build::authors())]
    pub authors: PathBuf,

    /// Files and directories copied verbatim into the output, relative to the root.
    #[serde(default = "defaults::build::passthrough")]
    #[educe(Default = defaults::build::passthrough())]
    pub passthrough: Vec<PathBuf>,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Link rewriting for the tips subtree.
    #[serde(default)]
    pub tips: TipsConfig,

    /// RSS feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,
}

/// `[build.tips]` section - scope and targets of the link rewriter.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct TipsConfig {
    /// Source path prefix of documents that get rewritten.
    #[serde(default = "defaults::build::tips::scope")]
    #[educe(Default = defaults::build::tips::scope())]
    pub scope: PathBuf,

    /// Locale segment of rewritten links: `/tips/<locale>/<name>`.
    #[serde(default = "defaults::build::tips::locale")]
    #[educe(Default = defaults::build::tips::locale())]
    pub locale: String,

    /// Asset directory referenced as `../../<assets>/` from tip sources.
    #[serde(default = "defaults::build::tips::assets")]
    #[educe(Default = defaults::build::tips::assets())]
    pub assets: String,
}

/// `[build.rss]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Feed path relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}
