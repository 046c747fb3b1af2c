//! CLI error types with miette diagnostics.
//!
//! Search failures keep the Portuguese message the user would see on the
//! landing page; everything else is reported in English with help text.

use miette::Diagnostic;
use thiserror::Error;

use leadsearch_config::ConfigError;
use leadsearch_core::{CoreError, Failure, FailureKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const UNSUPPORTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Search ───────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(
        code(leadsearch::invalid_cnpj),
        help("A CNPJ has 14 digits; dots, slashes and dashes are ignored.")
    )]
    InvalidTaxId { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(leadsearch::unsupported),
        help("Only CNPJ search is available. Try: leadsearch lookup --filter cnpj <CNPJ>")
    )]
    Unsupported { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(leadsearch::lookup_failed),
        help(
            "The registry at {base_url} did not return a usable answer.\n\
             Run with -vv to see the underlying error."
        )
    )]
    LookupFailed { message: String, base_url: String },

    // ── Setup ────────────────────────────────────────────────────────

    #[error("Could not set up the HTTP client: {reason}")]
    #[diagnostic(
        code(leadsearch::client),
        help("Check api.ca_cert in your configuration: leadsearch config show")
    )]
    ClientSetup { reason: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(leadsearch::validation))]
    Validation { field: String, reason: String },

    #[error("Unknown config key '{key}'")]
    #[diagnostic(code(leadsearch::config_key), help("Valid keys: {valid}"))]
    UnknownKey { key: String, valid: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Could not load configuration: {message}")]
    #[diagnostic(
        code(leadsearch::config),
        help("Fix or remove the file at {path}")
    )]
    Config { message: String, path: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render {format} output: {message}")]
    #[diagnostic(code(leadsearch::render))]
    Render { format: String, message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTaxId { .. } | Self::Validation { .. } | Self::UnknownKey { .. } => {
                exit_code::USAGE
            }
            Self::Unsupported { .. } => exit_code::UNSUPPORTED,
            Self::LookupFailed { .. } => exit_code::CONNECTION,
            Self::ClientSetup { .. }
            | Self::Config { .. }
            | Self::Io(_)
            | Self::Render { .. } => exit_code::GENERAL,
        }
    }

    /// Turn a failed search outcome into a diagnostic.
    pub fn from_failure(failure: &Failure, base_url: &str) -> Self {
        let message = failure.message.clone();
        match failure.kind {
            FailureKind::Validation => Self::InvalidTaxId { message },
            FailureKind::Unsupported => Self::Unsupported { message },
            FailureKind::Lookup => Self::LookupFailed {
                message,
                base_url: base_url.to_owned(),
            },
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config { message } => CliError::Validation {
                field: "base_url".into(),
                reason: message,
            },
            CoreError::Client { reason } => CliError::ClientSetup { reason },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownKey { key } => CliError::UnknownKey {
                key,
                valid: leadsearch_config::KEYS.join(", "),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
                path: leadsearch_config::config_path().display().to_string(),
            },
        }
    }
}
