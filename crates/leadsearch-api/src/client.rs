// HTTP client for the public CNPJ registry (publica.cnpj.ws).
//
// Single endpoint: GET /cnpj/{digits}. No authentication, no retries.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::CompanyRecord;
use crate::transport::TransportConfig;

/// Public registry root used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://publica.cnpj.ws/";

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the CNPJ lookup API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its
/// connection pool between clones.
#[derive(Debug, Clone)]
pub struct CnpjClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CnpjClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` from a `TransportConfig`.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The registry base URL, always ending with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ensure the base path ends with a slash so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// URL of the company resource for an already-validated digit string.
    pub fn company_url(&self, digits: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("cnpj/{digits}"))?)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the company registered under `digits`.
    ///
    /// `GET /cnpj/{digits}`. The caller is responsible for validating the
    /// identifier; this method sends whatever it is given.
    pub async fn company(&self, digits: &str) -> Result<CompanyRecord, Error> {
        let url = self.company_url(digits)?;
        self.get(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Map non-2xx to `Error::Status`, then decode the JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "lookup returned non-success status");
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_owned()),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Pull a human-readable message out of an error body, if it has one.
fn error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        #[serde(default)]
        detalhes: Option<String>,
        #[serde(default)]
        titulo: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed.detalhes.or(parsed.titulo).or(parsed.message)
}
