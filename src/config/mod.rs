//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section         | Purpose                                         |
//! |-----------------|-------------------------------------------------|
//! | `[base]`        | Site metadata (title, description, url)         |
//! | `[build]`       | Rendered/output paths, passthrough, authors     |
//! | `[build.tips]`  | Scope and locale of the tips link rewriter      |
//! | `[build.rss]`   | Feed generation                                 |
//! | `[search]`      | Post-build search indexing                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Tips"
//! description = "Short tips on web development"
//! url = "https://tips.example.com"
//!
//! [build]
//! rendered = "_rendered"
//! output = "_site"
//!
//! [build.rss]
//! enable = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod search;

pub use build::TipsConfig;
pub use error::ConfigError;

use base::BaseConfig;
use build::BuildConfig;
use search::SearchConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Search indexing settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.rendered, cli.rendered.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root);

        if let Commands::Build { build_args } = &cli.command {
            self.build.clean |= build_args.clean;
            Self::update_option(&mut self.build.rss.enable, build_args.rss.as_ref());
            if let Some(base_url) = &build_args.base_url {
                self.base.url = Some(base_url.clone());
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all filesystem paths against the root directory.
    ///
    /// `build.tips.scope` stays relative: it is matched against manifest
    /// input paths, which are project-relative.
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.source = Self::normalize_path(&root.join(&self.build.source));
        self.build.rendered = Self::normalize_path(&root.join(&self.build.rendered));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.authors = Self::normalize_path(&root.join(&self.build.authors));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before a build
    pub fn validate(&self) -> Result<()> {
        if self.build.rss.enable && self.base.url.is_none() {
            bail!("[base.url] is required for RSS generation");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.tips.locale.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[build.tips.locale] must not be empty".into()
            ));
        }

        if self.build.tips.assets.trim_matches('/').is_empty() {
            bail!(ConfigError::Validation(
                "[build.tips.assets] must not be empty".into()
            ));
        }

        if self.search.enable && self.search.command.is_empty() {
            bail!(ConfigError::Validation(
                "[search.enable] = true requires [search.command] to be set".into()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(content: &str) -> SiteConfig {
        SiteConfig::from_str(content).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = parse(
            r#"
            [base]
            title = "Tips"
            description = "Short tips"
        "#,
        );
        assert_eq!(config.base.title, "Tips");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_validate_rss_requires_url() {
        let config = parse(
            r#"
            [base]
            title = "Tips"
            description = "Short tips"

            [build.rss]
            enable = true
        "#,
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }

    #[test]
    fn test_validate_url_scheme() {
        let config = parse(
            r#"
            [base]
            title = "Tips"
            description = "Short tips"
            url = "tips.example.com"
        "#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_locale() {
        let config = parse(
            r#"
            [base]
            title = "Tips"
            description = "Short tips"

            [build.tips]
            locale = " "
        "#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_search_without_command() {
        let config = parse(
            r#"
            [base]
            title = "Tips"
            description = "Short tips"

            [search]
            enable = true
            command = []
        "#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_defaults_ok() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_update_with_cli_build_args() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "tipsite",
            "--root",
            root,
            "build",
            "--clean",
            "--rss",
            "--base-url",
            "https://tips.example.com",
        ]);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        assert!(config.build.clean);
        assert!(config.build.rss.enable);
        assert_eq!(config.base.url.as_deref(), Some("https://tips.example.com"));
        assert!(config.build.output.is_absolute());
        assert!(config.build.output.ends_with("_site"));
        assert!(config.get_root().is_absolute());
        assert_eq!(config.build.tips.scope, PathBuf::from("src/tips/en"));
    }

    #[test]
    fn test_update_with_cli_path_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "tipsite", "--root", root, "-r", "render-out", "-o", "dist", "build",
        ]);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        assert!(config.build.rendered.ends_with("render-out"));
        assert!(config.build.output.ends_with("dist"));
    }
}
