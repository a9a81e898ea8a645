//! Verbatim copies of static files into the output tree.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Copy every `[build].passthrough` entry from the project root to the output.
///
/// Entries under `[build].source` lose that prefix (`src/assets` lands at
/// `assets`); anything else keeps its root-relative path (`CNAME`).
/// Entries that do not exist are skipped with a log line.
/// Returns the number of files copied.
pub fn copy_passthrough(config: &SiteConfig) -> Result<usize> {
    let mut copied = 0;

    for entry in &config.build.passthrough {
        let source = config.get_root().join(entry);
        if !source.exists() {
            log!("warn"; "skipping missing passthrough `{}`", entry.display());
            continue;
        }
        let dest = config.build.output.join(output_path(config, &source, entry));
        copied += copy_entry(&source, &dest)?;
    }

    log!("assets"; "copied {copied} files");
    Ok(copied)
}

/// Output-relative path of a passthrough entry.
fn output_path(config: &SiteConfig, source: &Path, entry: &Path) -> PathBuf {
    source
        .strip_prefix(&config.build.source)
        .unwrap_or(entry)
        .to_path_buf()
}

fn copy_entry(source: &Path, dest: &Path) -> Result<usize> {
    if source.is_file() {
        copy_file(source, dest)?;
        return Ok(1);
    }

    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source)?;
        copy_file(entry.path(), &dest.join(relative))?;
        copied += 1;
    }
    Ok(copied)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)
        .with_context(|| format!("copying `{}` to `{}`", source.display(), dest.display()))?;
    Ok(())
}
