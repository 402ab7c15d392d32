//! Pulls a script URL out of a single input line.

use regex::Regex;
use tracing::trace;

/// First `src="..."` or `src='...'` attribute on the line.
const SRC_ATTR_PATTERN: &str = r#"(?i)src=["']([^"']+)["']"#;

/// URL prefixes accepted outside of a `<script>` fragment.
const URL_PREFIXES: &[&str] = &["http://", "https://", "//"];

/// Extracts script URLs from raw URLs and `<script src=...>` fragments.
pub struct LineExtractor {
    src_attr: Regex,
}

impl LineExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            src_attr: Regex::new(SRC_ATTR_PATTERN).expect("src attribute pattern is valid"),
        }
    }

    /// Return the URL encoded by `line`, if any.
    ///
    /// Lines containing `<script` only yield their `src` attribute. Other
    /// lines must start with `http://`, `https://` or `//`; bare hosts and
    /// relative paths are ignored.
    pub fn extract(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if line.to_lowercase().contains("<script") {
            let src = self
                .src_attr
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|src| !src.is_empty());

            if src.is_none() {
                trace!("Script tag without src attribute: {}", line);
            }
            return src;
        }

        if URL_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            return Some(line.to_string());
        }

        None
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
