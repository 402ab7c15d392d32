//! Pipeline turning an input listing into classified script records.

use crate::classify::{classify_script, is_first_party};
use crate::parser::{is_comment_line, normalize_url, LineExtractor};
use crate::types::{Result, ScriptMapError, ScriptRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

pub const NO_HOST_NOTE: &str = "No host component detected";

/// Runs extraction, normalization and classification over input lines.
pub struct Pipeline {
    extractor: LineExtractor,
    primary_domain: String,
}

impl Pipeline {
    /// Create a pipeline for the given primary domain (e.g. `example.com`).
    pub fn new(primary_domain: impl Into<String>) -> Self {
        Self {
            extractor: LineExtractor::new(),
            primary_domain: primary_domain.into(),
        }
    }

    pub fn primary_domain(&self) -> &str {
        &self.primary_domain
    }

    /// Classify a single line. Blank lines, comments and lines without a
    /// recognizable script URL yield `None`.
    pub fn process_line(&self, line: &str) -> Option<ScriptRecord> {
        let raw = line.trim();
        if raw.is_empty() || is_comment_line(raw) {
            trace!("Skipping blank or comment line: {}", raw);
            return None;
        }

        let Some(url) = self.extractor.extract(raw) else {
            debug!("No script URL in line: {}", raw);
            return None;
        };

        let parsed = normalize_url(&url);
        let mut classification = classify_script(&parsed.host, &parsed.path);
        let first_party = is_first_party(&parsed.host, &self.primary_domain);

        if parsed.host.is_empty() {
            classification.notes.push(NO_HOST_NOTE.to_string());
        }

        Some(ScriptRecord {
            raw: raw.to_string(),
            url,
            scheme: parsed.scheme,
            host: parsed.host,
            path: parsed.path,
            category: classification.category,
            subcategory: classification.subcategory,
            first_party,
            notes: classification.notes,
        })
    }

    /// Classify every line in order. Never fails; bad lines are dropped or
    /// annotated.
    pub fn process_lines<I, S>(&self, lines: I) -> Vec<ScriptRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.process_line(line.as_ref()))
            .collect()
    }

    /// Classify lines streamed from a reader. Fails only if reading fails.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<Vec<ScriptRecord>> {
        Ok(self.read_records(reader)?)
    }

    /// Classify the listing at `path`, or standard input when `path` is `-`.
    pub fn process_path(&self, path: &Path) -> Result<Vec<ScriptRecord>> {
        let unreadable = |source: io::Error| ScriptMapError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let records = if path == Path::new("-") {
            self.read_records(io::stdin().lock()).map_err(unreadable)?
        } else {
            let file = File::open(path).map_err(unreadable)?;
            self.read_records(BufReader::new(file)).map_err(unreadable)?
        };

        info!("Classified {} scripts from {:?}", records.len(), path);
        Ok(records)
    }

    fn read_records<R: BufRead>(&self, reader: R) -> io::Result<Vec<ScriptRecord>> {
        let mut records = Vec::new();
        for line in reader.lines() {
            if let Some(record) = self.process_line(&line?) {
                records.push(record);
            }
        }
        Ok(records)
    }
}
