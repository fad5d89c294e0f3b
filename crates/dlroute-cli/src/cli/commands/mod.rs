//! CLI command handlers, one file per command.

mod batch;
mod explain;
mod normalize;
mod output;
mod resolve;
mod rules;

pub use batch::run_batch;
pub use explain::run_explain;
pub use normalize::run_normalize;
pub use resolve::run_resolve;
pub use rules::run_rules;
