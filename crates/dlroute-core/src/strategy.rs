//! Identifiers of the content-extraction strategies a link can be routed to.
//!
//! The strategies themselves live outside this crate; the resolver only hands
//! back one of these tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of download strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyId {
    /// Imgur albums, galleries and single images.
    Imgur,
    /// Redgifs (formerly gifdeliverynetwork) clips.
    Redgifs,
    /// Plain file link fetched as-is.
    Direct,
    Erome,
    DelayForReddit,
    /// Reddit galleries and Patreon posts.
    Gallery,
    Gfycat,
    /// Text post on the source site itself.
    SelfPost,
    Youtube,
    /// Video hosted on the source site (v.redd.it).
    Vreddit,
    Pornhub,
    Vidble,
    /// Best-effort extractor used when no dedicated strategy matches.
    GenericFallback,
}

impl StrategyId {
    pub const ALL: [StrategyId; 13] = [
        StrategyId::Imgur,
        StrategyId::Redgifs,
        StrategyId::Direct,
        StrategyId::Erome,
        StrategyId::DelayForReddit,
        StrategyId::Gallery,
        StrategyId::Gfycat,
        StrategyId::SelfPost,
        StrategyId::Youtube,
        StrategyId::Vreddit,
        StrategyId::Pornhub,
        StrategyId::Vidble,
        StrategyId::GenericFallback,
    ];

    /// Stable name used in config files, CLI arguments and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyId::Imgur => "imgur",
            StrategyId::Redgifs => "redgifs",
            StrategyId::Direct => "direct",
            StrategyId::Erome => "erome",
            StrategyId::DelayForReddit => "delay-for-reddit",
            StrategyId::Gallery => "gallery",
            StrategyId::Gfycat => "gfycat",
            StrategyId::SelfPost => "self-post",
            StrategyId::Youtube => "youtube",
            StrategyId::Vreddit => "vreddit",
            StrategyId::Pornhub => "pornhub",
            StrategyId::Vidble => "vidble",
            StrategyId::GenericFallback => "generic-fallback",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyId {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StrategyId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for id in StrategyId::ALL {
            assert_eq!(id.as_str().parse::<StrategyId>(), Ok(id));
        }
        assert_eq!("  Self-Post ".parse::<StrategyId>(), Ok(StrategyId::SelfPost));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "flickr".parse::<StrategyId>().unwrap_err();
        assert_eq!(err, UnknownStrategy("flickr".to_string()));
        assert_eq!(err.to_string(), "unknown strategy \"flickr\"");
    }

    #[test]
    fn serde_names_match_display() {
        for id in StrategyId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{id}\""));
        }
    }
}
