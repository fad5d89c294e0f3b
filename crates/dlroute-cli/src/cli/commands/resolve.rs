//! `dlroute resolve <url>...` – classify links given on the command line.

use anyhow::Result;
use dlroute_core::batch::{classify_links, LinkPolicy};
use dlroute_core::Resolver;

use super::output::{ensure_supported, print_table};

pub fn run_resolve(
    resolver: &Resolver,
    policy: &LinkPolicy,
    urls: &[String],
    json: bool,
    strict: bool,
) -> Result<()> {
    let reports = classify_links(resolver, policy, urls, 1);
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_table(&reports);
    }
    ensure_supported(&reports, strict)
}
