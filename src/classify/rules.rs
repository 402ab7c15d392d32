//! Vendor rule table.
//!
//! Order matters at both levels: the first pattern of the first category
//! found in `host + path` wins.

use crate::types::Category;

/// Ordered (category, substring patterns) pairs. Patterns are lower-case.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Analytics,
        &[
            "google-analytics.com",
            "analytics.google.com",
            "googletagmanager.com",
            "gtag/js",
            "segment.io",
            "mixpanel.com",
            "matomo",
            "plausible.io",
            "snowplow",
        ],
    ),
    (
        Category::Ads,
        &[
            "doubleclick.net",
            "googlesyndication.com",
            "adservice.google.com",
            "adsystem.com",
            "adnxs.com",
            "taboola",
            "outbrain",
        ],
    ),
    (
        Category::CdnLibrary,
        &[
            "cdn.",
            "cdnjs",
            "jsdelivr",
            "cloudflare.com",
            "unpkg.com",
            "static.",
            "ajax.googleapis.com",
            "code.jquery.com",
            "bootstrap",
        ],
    ),
    (
        Category::Payment,
        &[
            "js.stripe.com",
            "stripe.com",
            "paypalobjects.com",
            "braintreepayments.com",
            "checkout.",
        ],
    ),
    (
        Category::Social,
        &[
            "connect.facebook.net",
            "facebook.com",
            "platform.twitter.com",
            "twitter.com/widgets",
            "linkedin.com",
            "snap.",
        ],
    ),
    (
        Category::Monitoring,
        &[
            "sentry.io",
            "bugsnag",
            "datadoghq.com",
            "newrelic",
            "rollbar",
            "logrocket",
        ],
    ),
    (
        Category::Maps,
        &[
            "maps.googleapis.com",
            "mapbox.com",
            "leaflet",
            "openstreetmap",
        ],
    ),
];

/// Find the first rule matching an already lower-cased search string.
pub fn match_rule(combined: &str) -> Option<(Category, &'static str)> {
    CATEGORY_RULES.iter().find_map(|(category, patterns)| {
        patterns
            .iter()
            .find(|pattern| combined.contains(*pattern))
            .map(|pattern| (*category, *pattern))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_lowercase() {
        for (_, patterns) in CATEGORY_RULES {
            for pattern in *patterns {
                assert_eq!(*pattern, pattern.to_lowercase());
            }
        }
    }

    #[test]
    fn test_table_covers_every_rule_category_once() {
        let categories: Vec<Category> = CATEGORY_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                Category::Analytics,
                Category::Ads,
                Category::CdnLibrary,
                Category::Payment,
                Category::Social,
                Category::Monitoring,
                Category::Maps,
            ]
        );
    }

    #[test]
    fn test_earlier_category_wins() {
        // Matches both "static." (cdn/library) and "stripe.com" (payment)
        assert_eq!(
            match_rule("static.stripe.com/v3.js"),
            Some((Category::CdnLibrary, "static."))
        );
        // Matches "cdn." and "maps.googleapis.com"; cdn/library comes first
        assert_eq!(
            match_rule("maps.googleapis.com/maps/api/js?cdn.x"),
            Some((Category::CdnLibrary, "cdn."))
        );
    }

    #[test]
    fn test_earlier_pattern_wins_within_category() {
        // "js.stripe.com" is listed before "stripe.com"
        assert_eq!(
            match_rule("js.stripe.com/v3/"),
            Some((Category::Payment, "js.stripe.com"))
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_rule("unknownvendor.io/lib.js"), None);
    }
}
