//! Shared report rendering for `resolve` and `batch`.

use anyhow::{bail, Result};
use dlroute_core::batch::{LinkOutcome, LinkReport};

/// One-word-ish status column for the table view.
pub fn status_label(outcome: &LinkOutcome) -> String {
    match outcome {
        LinkOutcome::Resolved { strategy, .. } => strategy.to_string(),
        LinkOutcome::SkippedDomain { domain } => format!("skipped ({domain})"),
        LinkOutcome::DisabledStrategy { strategy } => format!("disabled ({strategy})"),
        LinkOutcome::Unsupported => "unsupported".to_string(),
    }
}

pub fn print_table(reports: &[LinkReport]) {
    for r in reports {
        println!("{:<24} {}", status_label(&r.outcome), r.url);
    }
}

/// With `strict`, fail when any report is unsupported.
pub fn ensure_supported(reports: &[LinkReport], strict: bool) -> Result<()> {
    let unsupported = reports
        .iter()
        .filter(|r| r.outcome == LinkOutcome::Unsupported)
        .count();
    if strict && unsupported > 0 {
        bail!(
            "{} of {} link(s) have no download strategy",
            unsupported,
            reports.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlroute_core::resolver::MatchSource;
    use dlroute_core::StrategyId;

    fn report(outcome: LinkOutcome) -> LinkReport {
        LinkReport {
            url: "https://example.com/x".to_string(),
            normalized: "example.com/x".to_string(),
            outcome,
        }
    }

    #[test]
    fn labels() {
        assert_eq!(
            status_label(&LinkOutcome::Resolved {
                strategy: StrategyId::SelfPost,
                matched_by: MatchSource::Rule {
                    name: "reddit-self-post"
                },
            }),
            "self-post"
        );
        assert_eq!(
            status_label(&LinkOutcome::SkippedDomain {
                domain: "youtube.com".to_string()
            }),
            "skipped (youtube.com)"
        );
        assert_eq!(
            status_label(&LinkOutcome::DisabledStrategy {
                strategy: StrategyId::Youtube
            }),
            "disabled (youtube)"
        );
        assert_eq!(status_label(&LinkOutcome::Unsupported), "unsupported");
    }

    #[test]
    fn strict_fails_only_on_unsupported() {
        let reports = vec![
            report(LinkOutcome::DisabledStrategy {
                strategy: StrategyId::Youtube,
            }),
            report(LinkOutcome::Unsupported),
        ];
        assert!(ensure_supported(&reports, false).is_ok());
        let err = ensure_supported(&reports, true).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 link(s) have no download strategy");
        assert!(ensure_supported(&reports[..1], true).is_ok());
    }
}
