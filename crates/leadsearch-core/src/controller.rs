// ── Search form controller ──
//
// Owns the search state for one session. Validation and every state
// change are synchronous; the only suspension point is the lookup call.
// A generation counter guarantees that only the latest submission can
// settle the outcome.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use leadsearch_api::CnpjClient;

use crate::config::LookupConfig;
use crate::error::{CoreError, SearchError};
use crate::lookup::CompanyLookup;
use crate::model::outcome::Submission;
use crate::model::{FilterKind, Query, RequestOutcome, SearchState};

/// Drives searches and publishes [`SearchState`] changes.
///
/// Cheaply cloneable via `Arc`; clones share the same state, so a
/// submission can run on a spawned task while the UI keeps editing.
pub struct SearchController<L = CnpjClient> {
    inner: Arc<Inner<L>>,
}

struct Inner<L> {
    lookup: L,
    state: watch::Sender<SearchState>,
}

impl<L> Clone for SearchController<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SearchController<CnpjClient> {
    /// Build a controller backed by the HTTP client `config` describes.
    pub fn from_config(config: &LookupConfig) -> Result<Self, CoreError> {
        let client = config.build_client()?;
        debug!(base_url = %client.base_url(), "search controller ready");
        Ok(Self::new(client))
    }
}

impl<L: CompanyLookup> SearchController<L> {
    pub fn new(lookup: L) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(Inner { lookup, state }),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.inner.lookup
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    // ── Form edits ───────────────────────────────────────────────────

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.send_if_modified(|s| s.set_text(text));
    }

    pub fn select_filter(&self, filter: FilterKind) {
        self.inner.state.send_if_modified(|s| s.set_filter(filter));
    }

    pub fn set_focused(&self, focused: bool) {
        self.inner.state.send_if_modified(|s| s.set_focused(focused));
    }

    // ── Submission ───────────────────────────────────────────────────

    /// Store `query` in the form, then submit it.
    pub async fn submit_query(&self, query: Query) -> RequestOutcome {
        self.inner.state.send_modify(|s| s.set_query(query));
        self.submit().await
    }

    /// Submit the query currently held in the form.
    ///
    /// Returns the outcome of *this* submission. If a newer submission
    /// started while the lookup was in flight, that outcome is returned
    /// but not published: the newer submission owns the state.
    pub async fn submit(&self) -> RequestOutcome {
        let mut submission = Submission::Rejected(RequestOutcome::Idle);
        self.inner
            .state
            .send_modify(|s| submission = s.begin_submission());

        let (generation, tax_id) = match submission {
            Submission::Rejected(outcome) => {
                debug!(?outcome, "submission rejected without lookup");
                return outcome;
            }
            Submission::Lookup { generation, tax_id } => (generation, tax_id),
        };

        info!(%tax_id, generation, "looking up company");
        let outcome = match self.inner.lookup.lookup(&tax_id).await {
            Ok(record) => RequestOutcome::Success(record),
            Err(err) => {
                warn!(%tax_id, error = %err, "company lookup failed");
                RequestOutcome::from(SearchError::from(err))
            }
        };

        let applied = self
            .inner
            .state
            .send_if_modified(|s| s.settle(generation, outcome.clone()));
        if !applied {
            debug!(generation, "discarding stale lookup result");
        }
        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{MSG_INVALID_TAX_ID, MSG_LOOKUP_FAILED};
    use crate::model::TaxId;
    use leadsearch_api::CompanyRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every lookup with a fixed result and counts calls.
    struct Fixed {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CompanyLookup for Fixed {
        async fn lookup(&self, tax_id: &TaxId) -> Result<CompanyRecord, leadsearch_api::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(leadsearch_api::Error::Status {
                    status: 500,
                    message: "Internal Server Error".into(),
                });
            }
            Ok(CompanyRecord {
                cnpj: Some(tax_id.to_string()),
                ..CompanyRecord::default()
            })
        }
    }

    fn controller(fail: bool) -> SearchController<Fixed> {
        SearchController::new(Fixed {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[tokio::test]
    async fn success_publishes_record() {
        let ctrl = controller(false);
        let outcome = ctrl.submit_query(Query::tax_id("11.222.333/0001-81")).await;

        assert_eq!(
            outcome.record().and_then(|r| r.cnpj.as_deref()),
            Some("11222333000181")
        );
        assert_eq!(ctrl.snapshot().outcome(), &outcome);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.lookup().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_clears_loading() {
        let ctrl = controller(true);
        ctrl.submit_query(Query::tax_id("11222333000181")).await;

        let state = ctrl.snapshot();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(MSG_LOOKUP_FAILED));
    }

    #[tokio::test]
    async fn validation_failure_skips_lookup() {
        let ctrl = controller(false);
        ctrl.submit_query(Query::tax_id("123")).await;

        assert_eq!(ctrl.snapshot().error(), Some(MSG_INVALID_TAX_ID));
        assert_eq!(ctrl.lookup().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submit_uses_form_state() {
        let ctrl = controller(false);
        ctrl.set_text("11222333000181");
        ctrl.select_filter(FilterKind::TaxId);
        ctrl.set_focused(true);

        let outcome = ctrl.submit().await;
        assert!(outcome.record().is_some());
        let state = ctrl.snapshot();
        assert!(state.focused());
        assert_eq!(state.generation(), 1);
    }

    #[tokio::test]
    async fn unchanged_edits_do_not_notify() {
        let ctrl = controller(false);
        let mut rx = ctrl.subscribe();
        rx.mark_unchanged();

        ctrl.select_filter(FilterKind::All);
        ctrl.set_focused(false);
        ctrl.set_text("");
        assert!(!rx.has_changed().unwrap());

        ctrl.set_text("1");
        assert!(rx.has_changed().unwrap());
    }
}
