//! `leadsearch-tui`: the LeadSearch landing page in the terminal.
//!
//! Built on [ratatui](https://ratatui.rs). A single scrollable screen shows
//! the catalog content around a live search panel backed by
//! `leadsearch-core`'s [`SearchController`]. Each submission runs on its own
//! task; a search bridge forwards every state change into the action loop.
//!
//! Logs are written to a file (default `/tmp/leadsearch-tui.log`) so they
//! never corrupt the terminal.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod search_bridge;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use leadsearch_core::{LookupConfig, SearchController};

use crate::app::App;

/// Browse the LeadSearch catalog and look up companies by CNPJ.
#[derive(Parser, Debug)]
#[command(name = "leadsearch-tui", version, about)]
struct Cli {
    /// Lookup API base URL (defaults to the public registry)
    #[arg(long, env = "LEADSEARCH_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (0 disables a configured timeout)
    #[arg(long, env = "LEADSEARCH_TIMEOUT")]
    timeout: Option<u64>,

    /// Log file path (defaults to /tmp/leadsearch-tui.log)
    #[arg(long, default_value = "/tmp/leadsearch-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may be written to stdout/stderr while
/// the terminal is in raw mode. The returned guard flushes on drop and must
/// live as long as the app.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "leadsearch_tui={log_level},leadsearch_core={log_level},leadsearch_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("leadsearch-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Config file and environment first, then command-line overrides.
fn resolve_lookup(cli: &Cli) -> Result<LookupConfig> {
    let cfg = leadsearch_config::load_config_or_default();
    let mut lookup = cfg
        .to_lookup_config()
        .wrap_err("invalid LeadSearch configuration")?;

    if let Some(raw) = cli.base_url.as_deref() {
        let url = Url::parse(raw).wrap_err_with(|| format!("invalid --base-url '{raw}'"))?;
        lookup.base_url = Some(url);
    }
    if let Some(secs) = cli.timeout {
        lookup.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    Ok(lookup)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal switches to raw mode
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let lookup = resolve_lookup(&cli)?;
    info!(base_url = lookup.base_url_str(), "starting leadsearch-tui");

    let controller = SearchController::from_config(&lookup)?;
    let mut app = App::new(controller);
    app.run().await?;

    Ok(())
}
