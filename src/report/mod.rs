//! Report generation for classified scripts.
//!
//! This module handles:
//! - Markdown summary and inventory documents
//! - JSON export
//! - Colored console output

pub mod console;
pub mod json;
pub mod markdown;
pub mod summary;

pub use console::ConsoleOutput;
pub use json::render_json;
pub use markdown::{render_inventory, render_summary};
pub use summary::ScanSummary;

use crate::types::{Result, ScriptMapError, ScriptRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of the reports written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub inventory: PathBuf,
    pub json: Option<PathBuf>,
}

impl ReportPaths {
    /// Report paths derived from an output base such as `out/scriptmap`.
    pub fn from_base(base: &str, with_json: bool) -> Self {
        Self {
            summary: PathBuf::from(format!("{}_summary.md", base)),
            inventory: PathBuf::from(format!("{}_inventory.md", base)),
            json: with_json.then(|| PathBuf::from(format!("{}_inventory.json", base))),
        }
    }
}

/// Output base for a user-supplied prefix: a literal trailing `.md` is
/// removed, nothing else.
pub fn output_base(prefix: &str) -> Result<String> {
    let base = prefix.strip_suffix(".md").unwrap_or(prefix);
    if base.is_empty() {
        return Err(ScriptMapError::Config(format!(
            "output prefix '{}' leaves an empty file name",
            prefix
        )));
    }
    Ok(base.to_string())
}

/// Render and write every report for `records`.
pub fn write_reports(
    records: &[ScriptRecord],
    primary_domain: &str,
    paths: &ReportPaths,
) -> Result<()> {
    write_file(&paths.summary, &render_summary(records, primary_domain))?;
    write_file(&paths.inventory, &render_inventory(records))?;

    if let Some(ref json_path) = paths.json {
        write_file(json_path, &render_json(records, primary_domain)?)?;
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| ScriptMapError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
