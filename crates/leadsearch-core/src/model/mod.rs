// ── Search domain model ──
//
// Everything here is transient session state; nothing is persisted.

pub mod outcome;
pub mod query;
pub mod tax_id;

pub use outcome::{Failure, RequestOutcome, SearchState};
pub use query::{FilterKind, Query};
pub use tax_id::{TAX_ID_LEN, TaxId, strip_non_digits};
