//! `[base]` section configuration.
//!
//! Contains basic site information used by the feed and the page index.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Tips"
/// description = "Short tips on web development"
/// url = "https://tips.example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as the feed channel title.
    pub title: String,

    /// Site description, used as the feed channel description.
    pub description: String,

    /// Fallback author for feed items without authors.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Contact email for rss `<author>` (`email (Name)`).
    /// Without it, feed items carry no author.
    #[serde(default)]
    pub email: Option<String>,

    /// Base URL for absolute links in the feed.
    /// Required when `[build.rss].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en", "de-DE").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
