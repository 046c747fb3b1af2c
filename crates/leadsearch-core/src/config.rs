// ── Runtime lookup configuration ──
//
// Describes *where* and *how* to reach the registry. Never touches disk:
// the CLI/TUI builds a `LookupConfig` from their own config layer and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use leadsearch_api::transport::{TlsMode, TransportConfig};
use leadsearch_api::{CnpjClient, DEFAULT_BASE_URL};

use crate::error::CoreError;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Bundled webpki roots.
    #[default]
    SystemDefaults,
    /// Also trust the PEM certificate at this path.
    CustomCa(PathBuf),
}

/// Configuration for reaching the lookup API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupConfig {
    /// Registry root. `None` means the public registry.
    pub base_url: Option<Url>,
    pub tls: TlsVerification,
    /// Whole-request timeout. `None` lets a request run until it settles.
    pub timeout: Option<Duration>,
}

impl LookupConfig {
    /// Effective registry root as a string.
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_ref().map_or(DEFAULT_BASE_URL, Url::as_str)
    }

    fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            },
            timeout: self.timeout,
        }
    }

    /// Build the HTTP client this configuration describes.
    pub fn build_client(&self) -> Result<CnpjClient, CoreError> {
        Ok(CnpjClient::new(self.base_url_str(), &self.transport())?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_public_registry() {
        let config = LookupConfig::default();
        assert_eq!(config.base_url_str(), "https://publica.cnpj.ws/");
        assert_eq!(config.timeout, None);

        let client = config.build_client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://publica.cnpj.ws/");
    }

    #[test]
    fn override_is_used() {
        let config = LookupConfig {
            base_url: Some(Url::parse("http://127.0.0.1:8080/api").unwrap()),
            ..LookupConfig::default()
        };
        let client = config.build_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/api/");
    }

    #[test]
    fn missing_ca_file_is_a_client_error() {
        let config = LookupConfig {
            tls: TlsVerification::CustomCa(PathBuf::from("/nonexistent/leadsearch-ca.pem")),
            ..LookupConfig::default()
        };
        assert!(matches!(
            config.build_client().unwrap_err(),
            CoreError::Client { .. }
        ));
    }
}
