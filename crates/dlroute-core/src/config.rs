use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::DEFAULT_FALLBACK_HOSTS;
use crate::strategy::StrategyId;

/// Generic best-effort extractor settings (optional `[fallback]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// When false, links no static rule matches are always unsupported.
    pub enabled: bool,
    /// Domains (and their subdomains) the generic extractor claims.
    pub hosts: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hosts: DEFAULT_FALLBACK_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/dlroute/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlrouteConfig {
    /// Links on these domains (or subdomains) are skipped before resolution.
    #[serde(default)]
    pub skip_domains: Vec<String>,
    /// Links resolving to these strategies are dropped.
    #[serde(default)]
    pub disabled_strategies: Vec<StrategyId>,
    /// Default worker count for batch classification.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

fn default_workers() -> usize {
    1
}

impl Default for DlrouteConfig {
    fn default() -> Self {
        Self {
            skip_domains: Vec::new(),
            disabled_strategies: Vec::new(),
            workers: default_workers(),
            fallback: FallbackConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlroute")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DlrouteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DlrouteConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path (must exist).
pub fn load_from(path: &Path) -> Result<DlrouteConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: DlrouteConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

fn write_config(path: &Path, cfg: &DlrouteConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
