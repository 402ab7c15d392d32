//! Script classification.
//!
//! This module handles:
//! - First-party / third-party determination against the primary domain
//! - Vendor category matching against the ordered rule table
//! - Heuristic notes for scripts no rule recognizes

pub mod party;
pub mod rules;

pub use party::is_first_party;
pub use rules::{match_rule, CATEGORY_RULES};

use crate::types::Category;
use tracing::debug;

pub const WIDGET_NOTE: &str = "Widget-style script (embedded component)";
pub const TRACKING_NOTE: &str = "Tracking-related identifier in URL";
pub const BUNDLE_NOTE: &str = "Large JS bundle - may include multiple libraries";

/// Outcome of classifying one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// The matched rule pattern, empty for `Generic`.
    pub subcategory: String,
    pub notes: Vec<String>,
}

/// Classify a script by its host and path.
///
/// Matching is plain substring containment over `host + path`, so
/// lookalike hosts (`google-analytics.com.evil.example`) match too.
pub fn classify_script(host: &str, path: &str) -> Classification {
    let combined = format!("{}{}", host, path).to_lowercase();

    if let Some((category, pattern)) = match_rule(&combined) {
        debug!("Matched rule '{}' ({}): {}", pattern, category, combined);
        return Classification {
            category,
            subcategory: pattern.to_string(),
            notes: Vec::new(),
        };
    }

    Classification {
        category: Category::Generic,
        subcategory: String::new(),
        notes: heuristic_notes(&combined),
    }
}

/// Advisory notes for unmatched scripts. Each check is independent.
fn heuristic_notes(combined: &str) -> Vec<String> {
    let mut notes = Vec::new();

    if has_keyword(combined, "widget") {
        notes.push(WIDGET_NOTE.to_string());
    }
    if has_keyword(combined, "tracker") || has_keyword(combined, "track") {
        notes.push(TRACKING_NOTE.to_string());
    }
    if has_keyword(combined, "bundle") || has_keyword(combined, "vendor") {
        notes.push(BUNDLE_NOTE.to_string());
    }

    notes
}

/// Keyword occurrence that starts a word, so `unknownvendor.io` does not
/// count as a vendor bundle while `/vendor.js` and `widget-loader` do.
fn has_keyword(haystack: &str, keyword: &str) -> bool {
    haystack.match_indices(keyword).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_vendor() {
        let result = classify_script("www.googletagmanager.com", "/gtm.js");
        assert_eq!(result.category, Category::Analytics);
        assert_eq!(result.subcategory, "googletagmanager.com");
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_classify_matches_path() {
        let result = classify_script("www.example.com", "/gtag/js");
        assert_eq!(result.category, Category::Analytics);
        assert_eq!(result.subcategory, "gtag/js");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let result = classify_script("Connect.Facebook.NET", "/en_US/sdk.js");
        assert_eq!(result.category, Category::Social);
        assert_eq!(result.subcategory, "connect.facebook.net");
    }

    #[test]
    fn test_lookalike_host_still_matches() {
        let result = classify_script("notgoogle-analytics.com.evil.example", "/ga.js");
        assert_eq!(result.category, Category::Analytics);
        assert_eq!(result.subcategory, "google-analytics.com");
    }

    #[test]
    fn test_generic_without_heuristics() {
        let result = classify_script("unknownvendor.io", "/lib.js");
        assert_eq!(result.category, Category::Generic);
        assert_eq!(result.subcategory, "");
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_generic_heuristic_notes_in_order() {
        let result = classify_script("widgets.acme.io", "/tracker/vendor.bundle.js");
        assert_eq!(result.category, Category::Generic);
        assert_eq!(
            result.notes,
            vec![
                WIDGET_NOTE.to_string(),
                TRACKING_NOTE.to_string(),
                BUNDLE_NOTE.to_string(),
            ]
        );
    }

    #[test]
    fn test_heuristic_keywords_start_a_word() {
        let result = classify_script("unknownvendor.io", "/mytracking.js");
        assert!(result.notes.is_empty());

        let result = classify_script("acme.io", "/assets/app-bundle.min.js");
        assert_eq!(result.notes, vec![BUNDLE_NOTE.to_string()]);
    }

    #[test]
    fn test_heuristics_only_for_unmatched() {
        // "track" appears, but the rule match short-circuits the heuristics
        let result = classify_script("cdn.acme.io", "/track.js");
        assert_eq!(result.category, Category::CdnLibrary);
        assert!(result.notes.is_empty());

        let result = classify_script("acme.io", "/js/track.js");
        assert_eq!(result.notes, vec![TRACKING_NOTE.to_string()]);
    }
}
