//! URL normalization into scheme, host and path.

use tracing::debug;
use url::Url;

/// Parsed components of a script URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Lower-cased host without port; empty when none was found.
    pub host: String,
    /// Never empty, defaults to `/`.
    pub path: String,
}

/// Split `url` into its scheme, host and path.
///
/// Protocol-relative URLs are treated as `https:`. A URL that fails to parse
/// still yields a path (best effort) with empty scheme and host.
pub fn normalize_url(url: &str) -> ParsedUrl {
    let candidate = if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    };

    match Url::parse(&candidate) {
        Ok(parsed) => ParsedUrl {
            scheme: parsed.scheme().to_lowercase(),
            host: parsed.host_str().unwrap_or_default().to_lowercase(),
            path: non_empty_path(parsed.path()),
        },
        Err(e) => {
            debug!("Unparseable URL '{}': {}", url, e);
            ParsedUrl {
                scheme: String::new(),
                host: String::new(),
                path: best_effort_path(&candidate),
            }
        }
    }
}

/// Path of a string the URL parser rejected: whatever follows the authority,
/// or the whole string when there is no `://`, minus query and fragment.
fn best_effort_path(url: &str) -> String {
    let rest = match url.find("://") {
        Some(idx) => {
            let after_scheme = &url[idx + 3..];
            after_scheme.find('/').map_or("", |slash| &after_scheme[slash..])
        }
        None => url,
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    non_empty_path(&rest[..end])
}

fn non_empty_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
