use thiserror::Error;

/// Top-level error type for the `leadsearch-api` crate.
///
/// Covers every failure mode of a lookup: building the client, the
/// transport itself, non-success statuses and undecodable bodies.
/// `leadsearch-core` folds all of them into a single user-facing message.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Response ────────────────────────────────────────────────────
    /// The lookup endpoint answered with a non-success status.
    #[error("Lookup API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
