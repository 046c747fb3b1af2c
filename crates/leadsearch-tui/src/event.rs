//! Terminal input pump.
//!
//! A background task merges crossterm input with two timers: a slow tick
//! that advances the "Buscando..." spinner and a faster frame clock.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal resized to (cols, rows).
    Resize(u16, u16),
    Tick,
    Render,
}

/// Timer periods for the pump.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    pub tick: Duration,
    pub frame: Duration,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            frame: Duration::from_millis(33),
        }
    }
}

/// Keep key presses and resizes. Releases, repeats, mouse, focus and
/// paste events are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, rates: Rates, cancel: CancellationToken) {
    let mut input = EventStream::new();
    let mut tick = interval(rates.tick);
    let mut frame = interval(rates.frame);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => return,
            _ = tick.tick() => Event::Tick,
            _ = frame.tick() => Event::Render,
            next = input.next() => match next {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "terminal input error");
                    continue;
                }
                None => return,
            },
        };
        if tx.send(event).is_err() {
            return;
        }
    }
}

/// Handle on the pump task. Dropping it stops the task.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn spawn(rates: Rates) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, rates, cancel.clone()));
        Self { rx, cancel }
    }

    /// Next event, or `None` once the pump has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
