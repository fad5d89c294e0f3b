//! Fallback capability probes.
//!
//! After the static table is exhausted the resolver asks each registered probe,
//! in order, whether its strategy can take the link. Probes only see the
//! normalized link and must not perform I/O.

use crate::strategy::StrategyId;
use crate::url_model::{host_matches_domain, host_of};

/// A strategy's claim on links the static table does not cover.
pub trait CapabilityProbe: Send + Sync {
    /// Name reported in resolutions and `dlroute rules`.
    fn name(&self) -> &str;

    /// Strategy selected when this probe claims a link.
    fn strategy(&self) -> StrategyId;

    /// True if the strategy can handle the normalized link.
    fn can_handle(&self, normalized: &str) -> bool;
}

/// Media hosts the generic extractor is known to handle and that have no
/// dedicated strategy.
pub const DEFAULT_FALLBACK_HOSTS: &[&str] = &[
    "bandcamp.com",
    "bilibili.com",
    "dailymotion.com",
    "facebook.com",
    "instagram.com",
    "rumble.com",
    "soundcloud.com",
    "streamable.com",
    "tiktok.com",
    "tumblr.com",
    "twitch.tv",
    "twitter.com",
    "vimeo.com",
    "x.com",
];

/// Claims links whose host is one of a list of domains (or a subdomain).
#[derive(Debug, Clone)]
pub struct HostListProbe {
    name: String,
    strategy: StrategyId,
    domains: Vec<String>,
}

impl HostListProbe {
    /// Probe for the generic best-effort extractor over `domains`.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "generic-host-list".to_string(),
            strategy: StrategyId::GenericFallback,
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyId) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl Default for HostListProbe {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_HOSTS.iter().copied())
    }
}

impl CapabilityProbe for HostListProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn strategy(&self) -> StrategyId {
        self.strategy
    }

    fn can_handle(&self, normalized: &str) -> bool {
        let Some(host) = host_of(normalized) else {
            return false;
        };
        self.domains.iter().any(|d| host_matches_domain(host, d))
    }
}

/// Wraps an arbitrary predicate as a probe.
pub struct PredicateProbe<F> {
    name: String,
    strategy: StrategyId,
    predicate: F,
}

impl<F> PredicateProbe<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, strategy: StrategyId, predicate: F) -> Self {
        Self {
            name: name.into(),
            strategy,
            predicate,
        }
    }
}

impl<F> CapabilityProbe for PredicateProbe<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn strategy(&self) -> StrategyId {
        self.strategy
    }

    fn can_handle(&self, normalized: &str) -> bool {
        (self.predicate)(normalized)
    }
}
