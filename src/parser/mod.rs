//! Input line parsing.
//!
//! This module handles:
//! - Recognizing comment lines in the input listing
//! - Extracting script URLs from bare URLs and `<script src=...>` fragments
//! - Normalizing URLs into scheme, host and path

pub mod extract;
pub mod normalize;

pub use extract::LineExtractor;
pub use normalize::{normalize_url, ParsedUrl};

/// Prefixes that mark a whole input line as a comment.
const COMMENT_PREFIXES: &[&str] = &["#", "//", "<!--"];

/// Check if a trimmed line is a comment.
///
/// `//` counts as a comment marker, so a bare protocol-relative URL on its
/// own line is skipped.
pub fn is_comment_line(trimmed: &str) -> bool {
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_comment_line() {
        assert!(is_comment_line("# analytics tags"));
        assert!(is_comment_line("// cdn.example.com/lib.js"));
        assert!(is_comment_line("<!-- <script src=\"a.js\"></script> -->"));
        assert!(!is_comment_line("https://example.com/a.js"));
        assert!(!is_comment_line("<script src=\"a.js\"></script> <!-- old -->"));
    }
}
