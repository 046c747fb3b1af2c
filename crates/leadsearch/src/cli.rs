//! Clap derive structures for the `leadsearch` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// leadsearch -- look up Brazilian companies by CNPJ
#[derive(Debug, Parser)]
#[command(
    name = "leadsearch",
    version,
    about = "Look up Brazilian companies by CNPJ from the command line",
    long_about = "Queries the public CNPJ registry (publica.cnpj.ws) and renders the\n\
        company record: legal name, CNPJ, address and principal activity.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Registry base URL (overrides config)
    #[arg(long, env = "LEADSEARCH_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "LEADSEARCH_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "LEADSEARCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Search category, named after the landing page's filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every category ("Todos")
    #[value(alias = "all")]
    Todos,
    /// CNPJ, the only category the registry can resolve
    #[value(alias = "tax-id")]
    Cnpj,
    /// Legal name ("Razão Social")
    #[value(alias = "legal-name")]
    Razao,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a company by CNPJ
    #[command(alias = "l", alias = "buscar")]
    Lookup(LookupArgs),

    /// Show registered-company totals by state
    Stats,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// CNPJ to look up; punctuation is ignored (e.g. 11.222.333/0001-81)
    pub query: String,

    /// Search category
    #[arg(long, short = 'f', default_value = "cnpj")]
    pub filter: FilterArg,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration value (e.g. api.base_url, defaults.timeout)
    Set {
        /// Dotted key
        key: String,
        /// New value; empty clears optional keys
        value: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
