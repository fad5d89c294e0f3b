//! `dlroute rules` – list the static rule table and fallback chain.

use dlroute_core::resolver::rules;
use dlroute_core::url_model::WEB_EXTENSIONS;
use dlroute_core::Resolver;

pub fn run_rules(resolver: &Resolver) {
    println!("{:<4} {:<18} {:<18} {}", "#", "RULE", "STRATEGY", "PATTERN");
    for (i, rule) in rules().iter().enumerate() {
        println!(
            "{:<4} {:<18} {:<18} {}",
            i + 1,
            rule.name,
            rule.strategy.to_string(),
            rule.pattern()
        );
    }
    println!("direct-file skips links ending in: {}", WEB_EXTENSIONS.join(", "));

    let mut probes = resolver.probes().peekable();
    if probes.peek().is_none() {
        println!("fallback: disabled");
        return;
    }
    for probe in probes {
        println!("fallback: {} -> {}", probe.name(), probe.strategy());
    }
}
