//! Host extraction and domain matching on normalized links.

/// Returns the host part of a normalized link (everything before the first
/// `/`, without port). `None` when the link has no authority.
pub fn host_of(normalized: &str) -> Option<&str> {
    let authority = normalized.split('/').next()?;
    let host = if authority.starts_with('[') {
        // IPv6 literal keeps its brackets.
        match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        }
    } else {
        authority.split(':').next().unwrap_or(authority)
    };
    let host = host.trim();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// True if `host` is `domain` or a subdomain of it (ASCII case-insensitive).
///
/// A leading `.` or `www.` on `domain` is ignored, so config entries like
/// `www.vimeo.com` and `.vimeo.com` behave the same as `vimeo.com`.
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    let domain = domain.trim();
    let domain = domain.strip_prefix('.').unwrap_or(domain);
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    if domain.is_empty() || host.len() < domain.len() {
        return false;
    }

    let split = host.len() - domain.len();
    if !host.is_char_boundary(split) || !host[split..].eq_ignore_ascii_case(domain) {
        return false;
    }
    split == 0 || host.as_bytes()[split - 1] == b'.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_of_normalized_links() {
        assert_eq!(host_of("imgur.com/abc"), Some("imgur.com"));
        assert_eq!(host_of("localhost:8080/a.png"), Some("localhost"));
        assert_eq!(host_of("[::1]:9000/x"), Some("[::1]"));
        assert_eq!(host_of("vimeo.com"), Some("vimeo.com"));
        assert_eq!(host_of("/only/path"), None);
        assert_eq!(host_of(""), None);
    }

    #[test]
    fn domain_and_subdomains_match() {
        assert!(host_matches_domain("vimeo.com", "vimeo.com"));
        assert!(host_matches_domain("player.vimeo.com", "vimeo.com"));
        assert!(host_matches_domain("Player.Vimeo.COM", "vimeo.com"));
        assert!(host_matches_domain("vimeo.com", "www.vimeo.com"));
        assert!(host_matches_domain("vimeo.com", ".vimeo.com"));
    }

    #[test]
    fn lookalike_hosts_do_not_match() {
        assert!(!host_matches_domain("notvimeo.com", "vimeo.com"));
        assert!(!host_matches_domain("vimeo.com.evil.net", "vimeo.com"));
        assert!(!host_matches_domain("com", "vimeo.com"));
        assert!(!host_matches_domain("vimeo.com", ""));
    }
}
