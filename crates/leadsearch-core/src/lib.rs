//! Search state and rules between `leadsearch-api` and UI consumers (CLI / TUI).
//!
//! - **[`SearchController`]**: owns the [`SearchState`] of one session,
//!   validates submissions and reconciles the asynchronous lookup. State is
//!   published through a `tokio::sync::watch` channel; a generation counter
//!   keeps a late response from overwriting a newer submission.
//!
//! - **[`TaxId`]**: a CNPJ reduced to 14 ASCII digits. Holding one means
//!   the format check already passed.
//!
//! - **[`CompanyLookup`]**: the seam between the controller and HTTP.
//!   Implemented for [`CnpjClient`]; tests plug in scripted fakes.
//!
//! - **[`CompanyView`]**: display mapping of a record, with the fixed
//!   Portuguese placeholders for absent fields.
//!
//! - **[`catalog`]**: static landing-page content shared by both binaries.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod model;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{LookupConfig, TlsVerification};
pub use controller::SearchController;
pub use error::{CoreError, FailureKind, SearchError};
pub use lookup::CompanyLookup;
pub use model::{Failure, FilterKind, Query, RequestOutcome, SearchState, TaxId, strip_non_digits};
pub use view::CompanyView;

// Wire types consumers need without depending on the api crate directly.
pub use leadsearch_api::{Activity, CnpjClient, CompanyRecord, Error as LookupError};
