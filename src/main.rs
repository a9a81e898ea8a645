//! tipsite - post-processing stage for a static tips blog.

mod build;
mod cli;
mod config;
mod content;
mod feed;
mod filters;
mod index;
mod logger;
mod passthrough;
mod search;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{Document, TipsRewriter, extract_excerpt, extract_image};
use std::{fs, path::Path};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config),
        Commands::Excerpt { file } => {
            let doc = read_document(file, file.to_string_lossy())?;
            println!("{}", extract_excerpt(&doc).unwrap_or_default());
            Ok(())
        }
        Commands::Image { file } => {
            let doc = read_document(file, file.to_string_lossy())?;
            println!("{}", extract_image(&doc));
            Ok(())
        }
        Commands::Rewrite { file, source } => {
            let doc = read_document(file, source.as_str())?;
            let rewriter = TipsRewriter::new(&config.build.tips)?;
            print!("{}", rewriter.rewrite_document(&doc).unwrap_or_default());
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// Only `build` requires the config file; the single-file commands fall back
/// to defaults.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else if cli.is_build() {
        bail!("Config file not found: {}", config_path.display());
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn read_document(file: &Path, input: impl Into<String>) -> Result<Document> {
    let html =
        fs::read_to_string(file).with_context(|| format!("reading `{}`", file.display()))?;
    Ok(Document::new(input, Some(html)))
}
