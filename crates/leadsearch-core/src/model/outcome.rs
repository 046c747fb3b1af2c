// ── Search state ──
//
// `SearchState` is the whole of what a rendering layer needs: the query
// being edited, the focus flag and the outcome of the latest submission.
// Fields are private; only the controller mutates them.

use serde::Serialize;

use leadsearch_api::CompanyRecord;

use super::query::{FilterKind, Query};
use super::tax_id::TaxId;
use crate::error::{FailureKind, SearchError};

// ── RequestOutcome ──────────────────────────────────────────────────

/// Result of the most recent search attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum RequestOutcome {
    #[default]
    Idle,
    Loading,
    Success(CompanyRecord),
    Failure(Failure),
}

impl RequestOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn record(&self) -> Option<&CompanyRecord> {
        match self {
            Self::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<SearchError> for RequestOutcome {
    fn from(err: SearchError) -> Self {
        Self::Failure(Failure::from(&err))
    }
}

/// A failed submission as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&SearchError> for Failure {
    fn from(err: &SearchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

// ── SearchState ─────────────────────────────────────────────────────

/// What `begin_submission` decided.
#[derive(Debug)]
pub(crate) enum Submission {
    /// Settled synchronously; no request is made.
    Rejected(RequestOutcome),
    /// A lookup must be issued and settled under `generation`.
    Lookup { generation: u64, tax_id: TaxId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: Query,
    focused: bool,
    outcome: RequestOutcome,
    generation: u64,
}

impl SearchState {
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn text(&self) -> &str {
        &self.query.text
    }

    pub fn filter(&self) -> FilterKind {
        self.query.filter
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        self.outcome.is_loading()
    }

    /// Message of the visible failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.outcome.failure().map(|f| f.message.as_str())
    }

    /// Record of the visible success, if any.
    pub fn result(&self) -> Option<&CompanyRecord> {
        self.outcome.record()
    }

    /// Number of submissions started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Mutations (controller only) ─────────────────────────────────

    pub(crate) fn set_text(&mut self, text: String) -> bool {
        if self.query.text == text {
            return false;
        }
        self.query.text = text;
        true
    }

    pub(crate) fn set_filter(&mut self, filter: FilterKind) -> bool {
        if self.query.filter == filter {
            return false;
        }
        self.query.filter = filter;
        true
    }

    pub(crate) fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        true
    }

    pub(crate) fn set_query(&mut self, query: Query) {
        self.query = query;
    }

    /// Start a submission of the current query.
    ///
    /// The previous outcome is discarded and the generation bumped before
    /// anything else, so a late settlement of an earlier submission can
    /// no longer apply.
    pub(crate) fn begin_submission(&mut self) -> Submission {
        self.generation = self.generation.wrapping_add(1);
        self.outcome = RequestOutcome::Idle;

        let decided = match self.query.filter {
            FilterKind::TaxId => TaxId::parse(&self.query.text),
            filter @ (FilterKind::All | FilterKind::LegalName) => {
                Err(SearchError::Unsupported { filter })
            }
        };

        match decided {
            Ok(tax_id) => {
                self.outcome = RequestOutcome::Loading;
                Submission::Lookup {
                    generation: self.generation,
                    tax_id,
                }
            }
            Err(err) => {
                self.outcome = RequestOutcome::from(err);
                Submission::Rejected(self.outcome.clone())
            }
        }
    }

    /// Apply the result of submission `generation` if it is still current.
    pub(crate) fn settle(&mut self, generation: u64, outcome: RequestOutcome) -> bool {
        if generation != self.generation || !self.outcome.is_loading() {
            return false;
        }
        self.outcome = outcome;
        true
    }
}
