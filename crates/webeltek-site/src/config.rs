//! Server configuration
//!
//! Leptos options (address, site root) come from `[package.metadata.leptos]`
//! and `LEPTOS_*` variables; the settings here are specific to this site.

use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "webeltek_site=debug,tower_http=debug";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Extra static directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            assets_dir: non_empty("WEBELTEK_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
