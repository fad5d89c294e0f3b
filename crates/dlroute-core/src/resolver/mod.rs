//! Picks the download strategy for a link.
//!
//! Resolution normalizes the raw link, walks the static rule table in order
//! and, if nothing matched, asks the registered fallback probes in
//! registration order. The first claim wins. `Resolver` holds only immutable
//! data and is shared freely between threads.

mod error;
mod probe;
mod rules;

pub use error::UnsupportedLinkError;
pub use probe::{CapabilityProbe, HostListProbe, PredicateProbe, DEFAULT_FALLBACK_HOSTS};
pub use rules::{match_static, rules, Rule};

use serde::Serialize;
use std::fmt;

use crate::config::FallbackConfig;
use crate::strategy::StrategyId;
use crate::url_model::normalize;

/// What claimed a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    /// A static rule, by name.
    Rule { name: &'static str },
    /// A fallback probe, by name.
    Fallback { probe: String },
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSource::Rule { name } => write!(f, "rule {}", name),
            MatchSource::Fallback { probe } => write!(f, "fallback probe {}", probe),
        }
    }
}

/// Successful resolution with the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub normalized: String,
    pub strategy: StrategyId,
    pub matched_by: MatchSource,
}

/// Static rule table plus an ordered chain of fallback probes.
pub struct Resolver {
    probes: Vec<Box<dyn CapabilityProbe>>,
}

impl Resolver {
    /// Resolver with no fallback probes: only the static table applies.
    /// [`Resolver::default`] adds the built-in generic host list on top.
    pub fn static_only() -> Self {
        Self { probes: Vec::new() }
    }

    /// Appends a fallback probe; probes are consulted in the order added.
    pub fn with_probe<P>(mut self, probe: P) -> Self
    where
        P: CapabilityProbe + 'static,
    {
        self.probes.push(Box::new(probe));
        self
    }

    /// Builds the fallback chain from config. A disabled fallback section
    /// yields a static-table-only resolver.
    pub fn from_config(cfg: &FallbackConfig) -> Self {
        if !cfg.enabled {
            return Self::static_only();
        }
        Self::static_only().with_probe(HostListProbe::new(cfg.hosts.iter().cloned()))
    }

    pub fn probes(&self) -> impl Iterator<Item = &dyn CapabilityProbe> {
        self.probes.iter().map(|p| &**p)
    }

    /// Strategy for `raw`, or [`UnsupportedLinkError`] carrying `raw`.
    pub fn resolve(&self, raw: &str) -> Result<StrategyId, UnsupportedLinkError> {
        self.explain(raw).map(|r| r.strategy)
    }

    /// Like [`Resolver::resolve`] but also reports the normalized link and
    /// which rule or probe matched.
    pub fn explain(&self, raw: &str) -> Result<Resolution, UnsupportedLinkError> {
        let normalized = normalize(raw);
        self.resolve_normalized(raw, normalized)
    }

    /// Resolution for a link the caller already normalized. `raw` is only
    /// used for the error.
    pub fn resolve_normalized(
        &self,
        raw: &str,
        normalized: String,
    ) -> Result<Resolution, UnsupportedLinkError> {
        if let Some(rule) = match_static(&normalized) {
            tracing::debug!(
                "resolved {} -> {} (rule {})",
                normalized,
                rule.strategy,
                rule.name
            );
            return Ok(Resolution {
                normalized,
                strategy: rule.strategy,
                matched_by: MatchSource::Rule { name: rule.name },
            });
        }

        if let Some(probe) = self.probes.iter().find(|p| p.can_handle(&normalized)) {
            tracing::debug!(
                "resolved {} -> {} (fallback probe {})",
                normalized,
                probe.strategy(),
                probe.name()
            );
            return Ok(Resolution {
                normalized,
                strategy: probe.strategy(),
                matched_by: MatchSource::Fallback {
                    probe: probe.name().to_string(),
                },
            });
        }

        Err(UnsupportedLinkError::new(raw))
    }
}

impl Default for Resolver {
    /// Static table plus the built-in generic host list.
    fn default() -> Self {
        Self::static_only().with_probe(HostListProbe::default())
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("rules", &rules().len())
            .field(
                "probes",
                &self.probes.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
