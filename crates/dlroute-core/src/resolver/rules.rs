//! The ordered static rule table.
//!
//! First match wins. Order is significant: the broad direct-file rule sits
//! after the two clip/image hosts whose links often end in a file extension and
//! before the host rules that would otherwise claim bare file paths on their
//! domains (`i.redd.it/x.png` must stay a direct download).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::strategy::StrategyId;
use crate::url_model::is_web_resource;

/// One entry of the rule table.
pub struct Rule {
    /// Short stable name, shown by `dlroute explain` and `dlroute rules`.
    pub name: &'static str,
    pub strategy: StrategyId,
    source: &'static str,
    pattern: Regex,
    exclude: Option<fn(&str) -> bool>,
}

impl Rule {
    /// Pattern as written in the table (implicitly anchored at the start and
    /// case-insensitive).
    pub fn pattern(&self) -> &'static str {
        self.source
    }

    /// True if this rule claims the normalized link.
    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
            && !self.exclude.is_some_and(|excluded| excluded(normalized))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("strategy", &self.strategy)
            .field("pattern", &self.source)
            .field("excludes", &self.exclude.is_some())
            .finish()
    }
}

struct RuleSpec {
    name: &'static str,
    pattern: &'static str,
    strategy: StrategyId,
    exclude: Option<fn(&str) -> bool>,
}

const fn rule(name: &'static str, pattern: &'static str, strategy: StrategyId) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        strategy,
        exclude: None,
    }
}

// The direct-file extension class `[a-zA-Z34]{3,4}` is a loose heuristic
// (it admits `mp4`, `mp3`, `m4a` but also odd suffixes); later rules rely on
// exactly this shape.
const RULE_SPECS: &[RuleSpec] = &[
    rule("imgur", r"(i\.|m\.)?imgur", StrategyId::Imgur),
    rule(
        "redgifs",
        r"(i\.|thumbs\d\.)?(redgifs|gifdeliverynetwork)",
        StrategyId::Redgifs,
    ),
    RuleSpec {
        name: "direct-file",
        pattern: r".*/.*\.[a-zA-Z34]{3,4}(\?[\w;&=]*)?$",
        strategy: StrategyId::Direct,
        exclude: Some(is_web_resource),
    },
    rule("erome", r"erome\.com", StrategyId::Erome),
    rule("delay-for-reddit", r"delayforreddit\.com", StrategyId::DelayForReddit),
    rule("reddit-gallery", r"reddit\.com/gallery/", StrategyId::Gallery),
    rule("patreon", r"patreon\.com", StrategyId::Gallery),
    rule("gfycat", r"gfycat\.", StrategyId::Gfycat),
    rule("reddit-self-post", r"reddit\.com/r/", StrategyId::SelfPost),
    rule("youtube", r"(m\.)?youtu\.?be", StrategyId::Youtube),
    rule("reddit-image", r"i\.redd\.it", StrategyId::Direct),
    rule("reddit-video", r"v\.redd\.it", StrategyId::Vreddit),
    rule("pornhub", r"pornhub\.com", StrategyId::Pornhub),
    rule("vidble", r"vidble\.com", StrategyId::Vidble),
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_SPECS
        .iter()
        .map(|spec| Rule {
            name: spec.name,
            strategy: spec.strategy,
            source: spec.pattern,
            pattern: Regex::new(&format!("(?i)^(?:{})", spec.pattern))
                .expect("valid static rule pattern"),
            exclude: spec.exclude,
        })
        .collect()
});

/// The static rules in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// First static rule that claims an already-normalized link.
pub fn match_static(normalized: &str) -> Option<&'static Rule> {
    rules().iter().find(|rule| rule.matches(normalized))
}
