//! Shared configuration for the LeadSearch CLI and TUI.
//!
//! One TOML file plus `LEADSEARCH_*` environment overrides, translated to
//! `leadsearch_core::LookupConfig`. Both binaries depend on this crate;
//! the CLI layers its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use leadsearch_core::{LookupConfig, TlsVerification};

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "LEADSEARCH_CONFIG";

/// Keys accepted by [`Config::set`].
pub const KEYS: [&str; 5] = [
    "defaults.output",
    "defaults.color",
    "defaults.timeout",
    "api.base_url",
    "api.ca_cert",
];

const OUTPUT_FORMATS: [&str; 5] = ["table", "json", "json-compact", "yaml", "plain"];
const COLOR_MODES: [&str; 3] = ["auto", "always", "never"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown config key '{key}'")]
    UnknownKey { key: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds. Absent means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// Where the lookup API lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSection {
    /// Registry root; the public registry when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Extra PEM CA certificate to trust (corporate proxies, mirrors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Config {
    /// Translate to the runtime lookup configuration.
    pub fn to_lookup_config(&self) -> Result<LookupConfig, ConfigError> {
        let base_url = self
            .api
            .base_url
            .as_deref()
            .map(parse_base_url)
            .transpose()?;

        let tls = self
            .api
            .ca_cert
            .clone()
            .map_or(TlsVerification::SystemDefaults, TlsVerification::CustomCa);

        Ok(LookupConfig {
            base_url,
            tls,
            timeout: self.defaults.timeout.map(Duration::from_secs),
        })
    }

    /// Set a dotted key (see [`KEYS`]) from its string form.
    ///
    /// An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.replace('-', "_").as_str() {
            "defaults.output" => {
                self.defaults.output = one_of("defaults.output", value, &OUTPUT_FORMATS)?;
            }
            "defaults.color" => {
                self.defaults.color = one_of("defaults.color", value, &COLOR_MODES)?;
            }
            "defaults.timeout" => {
                self.defaults.timeout = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| ConfigError::Validation {
                        field: "defaults.timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?)
                };
            }
            "api.base_url" => {
                self.api.base_url = if value.is_empty() {
                    None
                } else {
                    parse_base_url(value)?;
                    Some(value.to_owned())
                };
            }
            "api.ca_cert" => {
                self.api.ca_cert = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: "api.base_url".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api.base_url".into(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<String, ConfigError> {
    if allowed.contains(&value) {
        Ok(value.to_owned())
    } else {
        Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected one of {}", allowed.join(", ")),
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$LEADSEARCH_CONFIG`, then platform
/// conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("br.com", "leadsearch", "leadsearch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("leadsearch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the default file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LEADSEARCH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.color, "auto");
        assert_eq!(cfg.defaults.timeout, None);
        assert_eq!(cfg.api, ApiSection::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\noutput = \"json\"\ntimeout = 15\n\n[api]\nbase_url = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.color, "auto");

        let lookup = cfg.to_lookup_config().unwrap();
        assert_eq!(lookup.timeout, Some(Duration::from_secs(15)));
        assert_eq!(lookup.base_url_str(), "http://localhost:9000/");
        assert_eq!(lookup.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/leadsearch/config.toml");

        let mut cfg = Config::default();
        cfg.set("api.ca_cert", "/etc/ssl/proxy.pem").unwrap();
        cfg.set("defaults.output", "yaml").unwrap();
        save_config_to(&cfg, &path).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), cfg);
        assert_eq!(
            cfg.to_lookup_config().unwrap().tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/proxy.pem"))
        );
    }

    #[test]
    fn default_lookup_config_has_no_timeout() {
        let lookup = Config::default().to_lookup_config().unwrap();
        assert_eq!(lookup, LookupConfig::default());
    }

    #[test]
    fn set_validates_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("defaults.output", "xml"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            cfg.set("defaults.timeout", "soon"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            cfg.set("api.base_url", "ftp://mirror"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            cfg.set("api.token", "x"),
            Err(ConfigError::UnknownKey { .. })
        ));
    }

    #[test]
    fn set_accepts_dashes_and_clears_with_empty() {
        let mut cfg = Config::default();
        cfg.set("api.base-url", "https://mirror.example.com/").unwrap();
        assert_eq!(cfg.api.base_url.as_deref(), Some("https://mirror.example.com/"));

        cfg.set("defaults.timeout", "5").unwrap();
        cfg.set("defaults.timeout", "").unwrap();
        cfg.set("api.base_url", "").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn invalid_base_url_in_file_fails_translation() {
        let cfg = Config {
            api: ApiSection {
                base_url: Some("not a url".into()),
                ca_cert: None,
            },
            ..Config::default()
        };
        assert!(matches!(
            cfg.to_lookup_config(),
            Err(ConfigError::Validation { .. })
        ));
    }
}
