//! dlroute core: picks the content-extraction strategy for a link found while
//! crawling posts. Classification is URL-string-only and never touches the
//! network.

pub mod batch;
pub mod config;
pub mod logging;
pub mod resolver;
pub mod strategy;
pub mod url_model;

pub use resolver::{Resolution, Resolver, UnsupportedLinkError};
pub use strategy::StrategyId;
pub use url_model::{is_web_resource, normalize};
