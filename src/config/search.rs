//! `[search]` section configuration.
//!
//! Post-build search indexing. Off unless enabled and `BUILD_ENV` matches.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[search]` section in site.toml.
///
/// # Example
/// ```toml
/// [search]
/// enable = true
/// env = "production"
/// command = ["npx", "-y", "pagefind", "--site"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Value of `BUILD_ENV` that activates indexing.
    #[serde(default = "defaults::search::env")]
    #[educe(Default = defaults::search::env())]
    pub env: String,

    /// Indexer command; the output directory is appended as last argument.
    #[serde(default = "defaults::search::command")]
    #[educe(Default = defaults::search::command())]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_search_config_defaults() {
        let config = r#"
            [base]
            title = "Tips"
            description = "Short tips"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.search.enable);
        assert_eq!(config.search.env, "production");
        assert_eq!(config.search.command, vec!["pagefind", "--site"]);
    }

    #[test]
    fn test_search_config_custom() {
        let config = r#"
            [base]
            title = "Tips"
            description = "Short tips"

            [search]
            enable = true
            env = "staging"
            command = ["npx", "pagefind", "--site"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.search.enable);
        assert_eq!(config.search.env, "staging");
        assert_eq!(config.search.command[0], "npx");
    }
}
