//! CLI configuration: thin wrapper around `leadsearch_config`.
//!
//! Adds the resolution rules for `GlobalOpts` flags, which take priority
//! over file and environment values.

use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use leadsearch_core::LookupConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use leadsearch_config::{Config, KEYS, config_path, load_config, load_config_or_default};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Output format: flag > config > table.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| <OutputFormat as ValueEnum>::from_str(&cfg.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// Color mode: flag > config > auto.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global
        .color
        .or_else(|| <ColorMode as ValueEnum>::from_str(&cfg.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto)
}

/// Translate config + flags into a `LookupConfig`.
///
/// `--timeout 0` disables a timeout set in the config file.
pub fn resolve_lookup(global: &GlobalOpts, cfg: &Config) -> Result<LookupConfig, CliError> {
    let mut lookup = cfg.to_lookup_config()?;

    if let Some(raw) = global.base_url.as_deref() {
        let url = Url::parse(raw).map_err(|e| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL '{raw}': {e}"),
        })?;
        lookup.base_url = Some(url);
    }

    if let Some(secs) = global.timeout {
        lookup.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    Ok(lookup)
}
