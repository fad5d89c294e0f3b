//! `dlroute batch <path>` – classify a link list, optionally in parallel.

use anyhow::{Context, Result};
use dlroute_core::batch::{classify_links, BatchSummary, LinkPolicy};
use dlroute_core::Resolver;
use std::io::Read;

use super::output::{ensure_supported, print_table};

/// Links from a list file: one per line, blank lines and `#` comments ignored.
pub fn parse_link_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading links from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading link list {path}"))
}

pub fn run_batch(
    resolver: &Resolver,
    policy: &LinkPolicy,
    path: &str,
    workers: usize,
    json: bool,
    strict: bool,
) -> Result<()> {
    let links = parse_link_lines(&read_input(path)?);
    tracing::info!("batch: {} links from {} on {} worker(s)", links.len(), path, workers);

    let reports = classify_links(resolver, policy, &links, workers);
    let summary = BatchSummary::from_reports(&reports);

    if json {
        let out = serde_json::json!({ "reports": &reports, "summary": &summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_table(&reports);
        println!();
        println!(
            "{} link(s): {} resolved, {} skipped, {} disabled, {} unsupported",
            summary.total,
            summary.resolved,
            summary.skipped_domain,
            summary.disabled_strategy,
            summary.unsupported
        );
        for (strategy, count) in &summary.by_strategy {
            println!("  {:<18} {}", strategy.to_string(), count);
        }
    }

    ensure_supported(&reports, strict)
}
