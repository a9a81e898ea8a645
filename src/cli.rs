//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tipsite post-processor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Rendered HTML directory path (relative to project root)
    #[arg(short, long)]
    pub rendered: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// enable rss feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Post-process the rendered site into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the plain-text excerpt of a rendered HTML file
    Excerpt {
        /// rendered HTML file
        file: PathBuf,
    },

    /// Print the normalized leading image tag of a rendered HTML file
    Image {
        /// rendered HTML file
        file: PathBuf,
    },

    /// Print a rendered HTML file with tips links rewritten
    Rewrite {
        /// rendered HTML file
        file: PathBuf,

        /// source path of the document, e.g. `./src/tips/en/grid.md`
        #[arg(short, long)]
        source: String,
    },
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
