//! CLI for the dlroute link classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dlroute_core::batch::LinkPolicy;
use dlroute_core::config::{self, DlrouteConfig};
use dlroute_core::Resolver;
use std::path::PathBuf;

use commands::{run_batch, run_explain, run_normalize, run_resolve, run_rules};

/// Top-level CLI for dlroute.
#[derive(Debug, Parser)]
#[command(name = "dlroute")]
#[command(about = "dlroute: pick the download strategy for content links", long_about = None)]
pub struct Cli {
    /// Read config from PATH instead of ~/.config/dlroute/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more links to their download strategy.
    Resolve {
        /// Links to classify.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print reports as JSON.
        #[arg(long)]
        json: bool,
        /// Exit with an error if any link is unsupported.
        #[arg(long)]
        strict: bool,
    },

    /// Show how a single link is normalized and which rule or probe claims it.
    Explain {
        /// Link to explain.
        url: String,
    },

    /// Print the normalized form of a link.
    Normalize {
        /// Link to normalize.
        url: String,
    },

    /// Classify links read from a file, one per line ("-" for stdin).
    Batch {
        /// Path to the link list.
        path: String,
        /// Worker threads (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
        /// Print reports and summary as JSON.
        #[arg(long)]
        json: bool,
        /// Exit with an error if any link is unsupported.
        #[arg(long)]
        strict: bool,
    },

    /// List the static rules in evaluation order and the fallback probes.
    Rules,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    fn run(self, cfg: &DlrouteConfig) -> Result<()> {
        let resolver = Resolver::from_config(&cfg.fallback);
        let policy = LinkPolicy::from_config(cfg);

        match self {
            CliCommand::Resolve { urls, json, strict } => {
                run_resolve(&resolver, &policy, &urls, json, strict)?
            }
            CliCommand::Explain { url } => run_explain(&resolver, &url)?,
            CliCommand::Normalize { url } => run_normalize(&url),
            CliCommand::Batch {
                path,
                jobs,
                json,
                strict,
            } => {
                let workers = jobs.unwrap_or(cfg.workers);
                run_batch(&resolver, &policy, &path, workers, json, strict)?
            }
            CliCommand::Rules => run_rules(&resolver),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
