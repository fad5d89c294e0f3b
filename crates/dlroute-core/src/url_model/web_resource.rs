//! Web-page exclusion for the generic direct-file rule.

use once_cell::sync::Lazy;
use regex::Regex;

/// Markup/script/style extensions that mark a link as a web page rather than
/// a downloadable file.
pub const WEB_EXTENSIONS: &[&str] = &[
    "asp", "aspx", "cfm", "cfml", "css", "htm", "html", "js", "php", "php3", "xhtml",
];

static WEB_RESOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^.*/.*\.({})$", WEB_EXTENSIONS.join("|")))
        .expect("valid web-resource pattern")
});

/// True if the path of a normalized link ends in one of [`WEB_EXTENSIONS`]
/// (case-insensitive). Only the final extension counts: `page.html.zip` is
/// not a web resource.
pub fn is_web_resource(normalized: &str) -> bool {
    WEB_RESOURCE.is_match(normalized)
}
