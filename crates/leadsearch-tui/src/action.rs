//! Every UI action. Actions are the only way state changes.

use leadsearch_core::{FilterKind, SearchState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Overlay ──
    ToggleHelp,

    // ── Search form ──
    FocusInput,
    UnfocusInput,
    /// Input text after an edit.
    QueryEdited(String),
    SelectFilter(FilterKind),
    Submit,
    /// Published by the search bridge after every controller change.
    SearchStateChanged(Box<SearchState>),

    // ── Scrolling ──
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
}
