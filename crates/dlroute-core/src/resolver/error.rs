//! Resolution failure.

/// No static rule and no fallback probe claimed the link.
///
/// Carries the raw link as given by the caller. Resolution is deterministic,
/// so retrying the same link yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no download strategy exists for url {url}")]
pub struct UnsupportedLinkError {
    pub url: String,
}

impl UnsupportedLinkError {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
