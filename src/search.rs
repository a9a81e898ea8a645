//! Post-build search indexing.
//!
//! Runs `[search].command <output-dir>` when `[search].enable` is set and
//! `BUILD_ENV` equals `[search].env`.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{
    env,
    path::Path,
    process::{Command, Output},
};

/// Environment variable selecting the build environment.
pub const BUILD_ENV: &str = "BUILD_ENV";

/// Whether indexing applies for the given `BUILD_ENV` value.
pub fn should_index(config: &SiteConfig, build_env: Option<&str>) -> bool {
    config.search.enable && build_env == Some(config.search.env.as_str())
}

/// Run the indexer against the output directory if enabled for this environment.
///
/// Returns whether the indexer ran.
pub fn run_indexer(config: &SiteConfig) -> Result<bool> {
    let build_env = env::var(BUILD_ENV).ok();
    if !should_index(config, build_env.as_deref()) {
        return Ok(false);
    }

    log!("search"; "indexing {}", config.build.output.display());
    exec(&config.search.command, &config.build.output)?;
    Ok(true)
}

fn exec(cmd: &[String], site: &Path) -> Result<Output> {
    let Some((name, args)) = cmd.split_first() else {
        bail!("Empty command");
    };

    let output = Command::new(name)
        .args(args)
        .arg(site)
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Command `{name}` failed with {}\n{}", output.status, stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(last) = stdout.lines().rev().find(|line| !line.trim().is_empty()) {
        log!("search"; "{}", last.trim());
    }
    Ok(output)
}
