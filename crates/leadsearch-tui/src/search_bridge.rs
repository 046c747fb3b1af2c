//! Search bridge: forwards [`SearchController`] state into the action loop.
//!
//! Runs as a background task. Every change published on the controller's
//! watch channel becomes an [`Action::SearchStateChanged`]. Intermediate
//! states may be coalesced; the latest one always arrives.
//!
//! [`SearchController`]: leadsearch_core::SearchController

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use leadsearch_core::SearchState;

use crate::action::Action;

/// Send the current state, then every change, until cancelled or either
/// channel closes.
pub async fn run_search_bridge(
    mut state_rx: watch::Receiver<SearchState>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let initial = state_rx.borrow_and_update().clone();
    if action_tx
        .send(Action::SearchStateChanged(Box::new(initial)))
        .is_err()
    {
        return;
    }

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = state_rx.borrow_and_update().clone();
                if action_tx.send(Action::SearchStateChanged(Box::new(state))).is_err() {
                    break;
                }
            }
        }
    }

    debug!("search bridge shut down");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use leadsearch_core::{
        CompanyLookup, CompanyRecord, FilterKind, LookupError, SearchController, TaxId,
    };

    struct NeverCalled;

    impl CompanyLookup for NeverCalled {
        async fn lookup(&self, _tax_id: &TaxId) -> Result<CompanyRecord, LookupError> {
            unreachable!("bridge tests never submit")
        }
    }

    fn expect_state(action: Option<Action>) -> SearchState {
        match action {
            Some(Action::SearchStateChanged(state)) => *state,
            other => panic!("expected SearchStateChanged, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn forwards_initial_state_and_edits() {
        let controller = SearchController::new(NeverCalled);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let bridge = tokio::spawn(run_search_bridge(
            controller.subscribe(),
            tx,
            cancel.clone(),
        ));

        let initial = expect_state(rx.recv().await);
        assert_eq!(initial.text(), "");

        controller.set_text("11222333000181");
        let edited = expect_state(rx.recv().await);
        assert_eq!(edited.text(), "11222333000181");

        controller.select_filter(FilterKind::TaxId);
        let filtered = expect_state(rx.recv().await);
        assert_eq!(filtered.filter(), FilterKind::TaxId);

        cancel.cancel();
        bridge.await.unwrap();
    }

    #[tokio::test]
    async fn stops_when_receiver_is_dropped() {
        let controller = SearchController::new(NeverCalled);
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        // Returns after the first failed send instead of looping forever.
        run_search_bridge(controller.subscribe(), tx, CancellationToken::new()).await;
    }
}
