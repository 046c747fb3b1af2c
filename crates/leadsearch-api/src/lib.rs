// leadsearch-api: Async Rust client for the public CNPJ lookup API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{CnpjClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::{Activity, CompanyRecord};
pub use transport::{TlsMode, TransportConfig};
