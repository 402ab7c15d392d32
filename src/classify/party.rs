//! First-party vs third-party determination.

/// Check if `host` is the primary domain or one of its subdomains.
///
/// Plain suffix matching on label boundaries; effective TLDs such as
/// `co.uk` are not recognized, so `example.co.uk` and `other.co.uk` only
/// share a party if the primary domain is given as `co.uk`.
pub fn is_first_party(host: &str, primary_domain: &str) -> bool {
    if host.is_empty() || primary_domain.is_empty() {
        return false;
    }

    let primary = primary_domain.to_lowercase();
    let primary = primary.trim_start_matches('.');
    if primary.is_empty() {
        return false;
    }

    let host = host.to_lowercase();
    host == primary
        || host
            .strip_suffix(primary)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
