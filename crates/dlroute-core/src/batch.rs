//! Classify many links at once under the user's skip/disable policy.
//!
//! For each link: skip it if its host is on the skip list, otherwise resolve
//! it, then drop it if its strategy is disabled. Reports keep input order.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::thread;

use crate::config::DlrouteConfig;
use crate::resolver::{MatchSource, Resolver};
use crate::strategy::StrategyId;
use crate::url_model::{host_matches_domain, host_of, normalize};

/// Which links to leave alone regardless of resolution.
#[derive(Debug, Clone, Default)]
pub struct LinkPolicy {
    skip_domains: Vec<String>,
    disabled: HashSet<StrategyId>,
}

impl LinkPolicy {
    pub fn new<D, S>(skip_domains: D, disabled: S) -> Self
    where
        D: IntoIterator<Item = String>,
        S: IntoIterator<Item = StrategyId>,
    {
        Self {
            skip_domains: skip_domains.into_iter().collect(),
            disabled: disabled.into_iter().collect(),
        }
    }

    pub fn from_config(cfg: &DlrouteConfig) -> Self {
        Self::new(
            cfg.skip_domains.iter().cloned(),
            cfg.disabled_strategies.iter().copied(),
        )
    }

    /// Skip-list entry matching the host of a normalized link, if any.
    fn skipped_domain(&self, normalized: &str) -> Option<&str> {
        let host = host_of(normalized)?;
        self.skip_domains
            .iter()
            .find(|d| host_matches_domain(host, d))
            .map(String::as_str)
    }

    pub fn is_disabled(&self, strategy: StrategyId) -> bool {
        self.disabled.contains(&strategy)
    }
}

/// What happened to one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkOutcome {
    Resolved {
        strategy: StrategyId,
        matched_by: MatchSource,
    },
    SkippedDomain {
        domain: String,
    },
    DisabledStrategy {
        strategy: StrategyId,
    },
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub url: String,
    pub normalized: String,
    #[serde(flatten)]
    pub outcome: LinkOutcome,
}

impl LinkReport {
    /// Strategy to dispatch to, if the link is to be downloaded.
    pub fn strategy(&self) -> Option<StrategyId> {
        match self.outcome {
            LinkOutcome::Resolved { strategy, .. } => Some(strategy),
            _ => None,
        }
    }
}

/// Classify a single link.
pub fn classify_link(resolver: &Resolver, policy: &LinkPolicy, raw: &str) -> LinkReport {
    let normalized = normalize(raw);

    if let Some(domain) = policy.skipped_domain(&normalized) {
        tracing::debug!("skipping {} (domain {} is on the skip list)", raw, domain);
        return LinkReport {
            url: raw.to_string(),
            outcome: LinkOutcome::SkippedDomain {
                domain: domain.to_string(),
            },
            normalized,
        };
    }

    match resolver.resolve_normalized(raw, normalized.clone()) {
        Ok(res) if policy.is_disabled(res.strategy) => {
            tracing::debug!("skipping {} (strategy {} is disabled)", raw, res.strategy);
            LinkReport {
                url: raw.to_string(),
                normalized: res.normalized,
                outcome: LinkOutcome::DisabledStrategy {
                    strategy: res.strategy,
                },
            }
        }
        Ok(res) => LinkReport {
            url: raw.to_string(),
            normalized: res.normalized,
            outcome: LinkOutcome::Resolved {
                strategy: res.strategy,
                matched_by: res.matched_by,
            },
        },
        Err(err) => {
            tracing::warn!("{}", err);
            LinkReport {
                url: raw.to_string(),
                normalized,
                outcome: LinkOutcome::Unsupported,
            }
        }
    }
}

/// Classify `links` with up to `workers` threads. Output order matches input.
pub fn classify_links<S>(
    resolver: &Resolver,
    policy: &LinkPolicy,
    links: &[S],
    workers: usize,
) -> Vec<LinkReport>
where
    S: AsRef<str> + Sync,
{
    let workers = workers.max(1).min(links.len().max(1));
    if workers == 1 {
        return links
            .iter()
            .map(|l| classify_link(resolver, policy, l.as_ref()))
            .collect();
    }

    let chunk_size = links.len().div_ceil(workers);
    tracing::debug!(
        "classifying {} links on {} workers ({} per worker)",
        links.len(),
        workers,
        chunk_size
    );

    thread::scope(|scope| {
        let handles: Vec<_> = links
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|l| classify_link(resolver, policy, l.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(reports) => reports,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// Counts per outcome and per resolved strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub skipped_domain: usize,
    pub disabled_strategy: usize,
    pub unsupported: usize,
    pub by_strategy: BTreeMap<StrategyId, usize>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[LinkReport]) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match &report.outcome {
                LinkOutcome::Resolved { strategy, .. } => {
                    summary.resolved += 1;
                    *summary.by_strategy.entry(*strategy).or_default() += 1;
                }
                LinkOutcome::SkippedDomain { .. } => summary.skipped_domain += 1,
                LinkOutcome::DisabledStrategy { .. } => summary.disabled_strategy += 1,
                LinkOutcome::Unsupported => summary.unsupported += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::PredicateProbe;

    fn resolver() -> Resolver {
        Resolver::static_only().with_probe(PredicateProbe::new(
            "vimeo-only",
            StrategyId::GenericFallback,
            |u: &str| u.starts_with("vimeo.com/"),
        ))
    }

    #[test]
    fn resolved_link_report() {
        let report = classify_link(&resolver(), &LinkPolicy::default(), "https://imgur.com/abc");
        assert_eq!(report.url, "https://imgur.com/abc");
        assert_eq!(report.normalized, "imgur.com/abc");
        assert_eq!(report.strategy(), Some(StrategyId::Imgur));
        assert_eq!(
            report.outcome,
            LinkOutcome::Resolved {
                strategy: StrategyId::Imgur,
                matched_by: MatchSource::Rule { name: "imgur" },
            }
        );
    }

    #[test]
    fn skip_domain_wins_before_resolution() {
        let policy = LinkPolicy::new(["youtube.com".to_string()], []);
        let report = classify_link(&resolver(), &policy, "https://m.youtube.com/watch");
        assert_eq!(
            report.outcome,
            LinkOutcome::SkippedDomain {
                domain: "youtube.com".to_string()
            }
        );
        assert_eq!(report.strategy(), None);

        // youtu.be is a different domain.
        let report = classify_link(&resolver(), &policy, "https://youtu.be/abc");
        assert_eq!(report.strategy(), Some(StrategyId::Youtube));
    }

    #[test]
    fn disabled_strategy_drops_link() {
        let policy = LinkPolicy::new([], [StrategyId::SelfPost]);
        let report = classify_link(&resolver(), &policy, "reddit.com/r/test/comments/xyz");
        assert_eq!(
            report.outcome,
            LinkOutcome::DisabledStrategy {
                strategy: StrategyId::SelfPost
            }
        );
    }

    #[test]
    fn unsupported_link_is_reported_not_raised() {
        let report = classify_link(
            &resolver(),
            &LinkPolicy::default(),
            "https://example.com/page.html",
        );
        assert_eq!(report.outcome, LinkOutcome::Unsupported);
        assert_eq!(report.normalized, "example.com/page.html");
    }

    #[test]
    fn policy_from_config() {
        let cfg = DlrouteConfig {
            skip_domains: vec!["erome.com".to_string()],
            disabled_strategies: vec![StrategyId::Pornhub],
            ..DlrouteConfig::default()
        };
        let policy = LinkPolicy::from_config(&cfg);
        assert!(policy.is_disabled(StrategyId::Pornhub));
        assert!(!policy.is_disabled(StrategyId::Erome));
        assert_eq!(policy.skipped_domain("erome.com/a/1"), Some("erome.com"));
        assert_eq!(policy.skipped_domain("imgur.com/a/1"), None);
    }

    #[test]
    fn parallel_matches_sequential_and_keeps_order() {
        let links: Vec<String> = (0..97)
            .map(|i| match i % 5 {
                0 => format!("https://imgur.com/{i}"),
                1 => format!("https://i.redd.it/{i}.jpg"),
                2 => format!("https://vimeo.com/{i}"),
                3 => format!("https://example.com/{i}.html"),
                _ => format!("https://v.redd.it/{i}"),
            })
            .collect();
        let resolver = resolver();
        let policy = LinkPolicy::default();

        let sequential = classify_links(&resolver, &policy, &links, 1);
        let parallel = classify_links(&resolver, &policy, &links, 8);
        assert_eq!(sequential, parallel);
        for (link, report) in links.iter().zip(&parallel) {
            assert_eq!(&report.url, link);
        }
    }

    #[test]
    fn classify_links_handles_empty_input() {
        let links: Vec<&str> = Vec::new();
        assert!(classify_links(&resolver(), &LinkPolicy::default(), &links, 4).is_empty());
    }

    #[test]
    fn summary_counts() {
        let policy = LinkPolicy::new(["erome.com".to_string()], [StrategyId::Gfycat]);
        let links = [
            "imgur.com/a",
            "imgur.com/b",
            "i.redd.it/c.png",
            "erome.com/a/1",
            "gfycat.com/x",
            "example.com/page.php",
            "vimeo.com/1",
        ];
        let reports = classify_links(&resolver(), &policy, &links, 2);
        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.resolved, 4);
        assert_eq!(summary.skipped_domain, 1);
        assert_eq!(summary.disabled_strategy, 1);
        assert_eq!(summary.unsupported, 1);
        assert_eq!(summary.by_strategy.get(&StrategyId::Imgur), Some(&2));
        assert_eq!(summary.by_strategy.get(&StrategyId::Direct), Some(&1));
        assert_eq!(summary.by_strategy.get(&StrategyId::GenericFallback), Some(&1));
    }

    #[test]
    fn report_json_shape() {
        let report = classify_link(&resolver(), &LinkPolicy::default(), "v.redd.it/abcd");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "url": "v.redd.it/abcd",
                "normalized": "v.redd.it/abcd",
                "status": "resolved",
                "strategy": "vreddit",
                "matched_by": { "kind": "rule", "name": "reddit-video" },
            })
        );
    }
}
