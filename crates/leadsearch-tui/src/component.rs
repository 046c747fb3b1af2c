//! Component trait, the building block for every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// Lifecycle: `init` → (`handle_key_event` | `update` | `render`)*
pub trait Component: Send {
    /// Called once on mount with the sender for dispatching actions.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Map a key to an action, or `None` to ignore it.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect);

    /// Whether the component is taking raw text input, in which case it
    /// receives every key except Ctrl+C.
    fn captures_input(&self) -> bool {
        false
    }

    /// Key hints for the status bar, as (key, description) pairs.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}
