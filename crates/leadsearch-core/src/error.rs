// ── Core error types ──
//
// `SearchError` is what a submission can fail with. Its Display output is
// the exact Portuguese message shown to the user; upstream detail is kept
// only as the error `source` so it reaches logs, never the screen.
//
// `CoreError` covers setup failures (bad base URL, unusable CA file) that
// happen before any search runs.

use serde::Serialize;
use thiserror::Error;

use crate::model::FilterKind;

pub const MSG_INVALID_TAX_ID: &str = "Por favor, insira um CNPJ válido com 14 dígitos.";
pub const MSG_LOOKUP_FAILED: &str = "Erro na busca. Verifique o CNPJ e tente novamente.";
pub const MSG_UNSUPPORTED_FILTER: &str = "Apenas a busca por CNPJ está implementada no momento.";

/// Why a submission did not produce a company record.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input did not contain exactly 14 digits.
    #[error("Por favor, insira um CNPJ válido com 14 dígitos.")]
    InvalidTaxId { digits: usize },

    /// The lookup call failed: non-success status, transport, or body.
    #[error("Erro na busca. Verifique o CNPJ e tente novamente.")]
    Lookup(#[source] leadsearch_api::Error),

    /// Only tax-id search exists.
    #[error("Apenas a busca por CNPJ está implementada no momento.")]
    Unsupported { filter: FilterKind },
}

impl SearchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidTaxId { .. } => FailureKind::Validation,
            Self::Lookup(_) => FailureKind::Lookup,
            Self::Unsupported { .. } => FailureKind::Unsupported,
        }
    }
}

impl From<leadsearch_api::Error> for SearchError {
    fn from(err: leadsearch_api::Error) -> Self {
        Self::Lookup(err)
    }
}

/// Category of a failed submission, kept alongside its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Lookup,
    Unsupported,
}

/// Errors raised while building the lookup stack.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Cannot build HTTP client: {reason}")]
    Client { reason: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<leadsearch_api::Error> for CoreError {
    fn from(err: leadsearch_api::Error) -> Self {
        match err {
            leadsearch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid base URL: {e}"),
            },
            leadsearch_api::Error::Tls(reason) => CoreError::Client { reason },
            other => CoreError::Client {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_message() {
        assert_eq!(
            SearchError::InvalidTaxId { digits: 3 }.to_string(),
            MSG_INVALID_TAX_ID
        );
        assert_eq!(
            SearchError::Unsupported {
                filter: FilterKind::LegalName
            }
            .to_string(),
            MSG_UNSUPPORTED_FILTER
        );
    }

    #[test]
    fn lookup_hides_upstream_detail() {
        let err = SearchError::from(leadsearch_api::Error::Status {
            status: 502,
            message: "Bad Gateway from upstream proxy".into(),
        });
        assert_eq!(err.to_string(), MSG_LOOKUP_FAILED);
        assert_eq!(err.kind(), FailureKind::Lookup);

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Lookup API returned HTTP 502: Bad Gateway from upstream proxy")
        );
    }

    #[test]
    fn invalid_url_maps_to_config_error() {
        let api_err = leadsearch_api::Error::InvalidUrl(url::ParseError::RelativeUrlWithoutBase);
        assert!(matches!(CoreError::from(api_err), CoreError::Config { .. }));
    }
}
