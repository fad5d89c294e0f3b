//! `dlroute explain <url>` – show normalization and the matching rule.

use anyhow::Result;
use dlroute_core::Resolver;

pub fn run_explain(resolver: &Resolver, url: &str) -> Result<()> {
    let res = resolver.explain(url)?;
    println!("url:        {url}");
    println!("normalized: {}", res.normalized);
    println!("matched by: {}", res.matched_by);
    println!("strategy:   {}", res.strategy);
    Ok(())
}
