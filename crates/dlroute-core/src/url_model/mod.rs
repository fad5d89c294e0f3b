//! URL normalization for classification.
//!
//! Rules match against a comparison-stable form of the link: authority + path,
//! with scheme, query, fragment, leading whitespace and a leading `www.`
//! removed. Nothing here fails; unparseable input is used as-is for the path.

mod domain;
mod web_resource;

pub use domain::{host_matches_domain, host_of};
pub use web_resource::{is_web_resource, WEB_EXTENSIONS};

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_WWW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(www\.?)?").expect("valid leading-www pattern"));

/// Normalizes a raw link into `authority + path` form.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)` for every input.
///
/// # Examples
///
/// - `normalize("https://www.example.com/a?b=1")` → `"example.com/a"`
/// - `normalize("   www.gfycat.com/test")` → `"gfycat.com/test"`
/// - `normalize("not a url")` → `"not a url"`
pub fn normalize(raw: &str) -> String {
    // Each pass that parses drops a scheme colon or a leading `//`, and the
    // other steps only remove characters, so this reaches a fixed point.
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let joined = authority_and_path(raw);
    LEADING_WWW.replace(&joined, "").into_owned()
}

/// Joins host, port and path of an absolute or protocol-relative URL.
/// Inputs without a host (schemeless links, `mailto:` and friends, garbage)
/// keep everything before the first `?` or `#`.
fn authority_and_path(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let parsed = if trimmed.starts_with("//") {
        url::Url::parse(&format!("http:{trimmed}"))
    } else {
        url::Url::parse(raw)
    };
    match parsed {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
            join_host_path(&parsed)
        }
        _ => without_query_or_fragment(raw).to_string(),
    }
}

fn without_query_or_fragment(raw: &str) -> &str {
    match raw.find(['?', '#']) {
        Some(end) => &raw[..end],
        None => raw,
    }
}

fn join_host_path(parsed: &url::Url) -> String {
    let host = parsed.host_str().unwrap_or_default();
    let mut out = String::with_capacity(host.len() + parsed.path().len() + 6);
    out.push_str(host);
    if let Some(port) = parsed.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out.push_str(parsed.path());
    out
}
