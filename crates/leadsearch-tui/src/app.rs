//! Application core: event loop, key routing, action dispatch.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use leadsearch_core::{CnpjClient, CompanyLookup, RequestOutcome, SearchController};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader, Rates};
use crate::screens::LandingScreen;
use crate::search_bridge::run_search_bridge;
use crate::theme;
use crate::tui::Tui;

pub const STATUS_BAR_HEIGHT: u16 = 1;

const HELP: &[(&str, &str)] = &[
    ("/ i Tab", "Focus the search field"),
    ("Esc", "Leave the search field"),
    ("Enter", "Search"),
    ("1 2 3", "Todos / CNPJ / Razão Social"),
    ("← →", "Previous / next filter"),
    ("Tab", "Next filter (while typing)"),
    ("j/k ↑/↓", "Scroll"),
    ("PgUp/PgDn", "Scroll a page"),
    ("g/G", "Top / bottom"),
    ("?", "Toggle this help"),
    ("q Ctrl+C", "Quit"),
];

/// Top-level application state and event loop.
pub struct App<L = CnpjClient> {
    controller: SearchController<L>,
    landing: LandingScreen,
    running: bool,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Stops the search bridge on exit.
    bridge_cancel: CancellationToken,
}

impl<L: CompanyLookup + 'static> App<L> {
    pub fn new(controller: SearchController<L>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            landing: LandingScreen::default(),
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            bridge_cancel: CancellationToken::new(),
        }
    }

    /// Run until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::start()?;
        self.landing.init(self.action_tx.clone())?;

        let size = tui.size()?;
        self.action_tx.send(Action::Resize(size.width, size.height))?;

        tokio::spawn(run_search_bridge(
            self.controller.subscribe(),
            self.action_tx.clone(),
            self.bridge_cancel.clone(),
        ));

        let mut events = EventReader::spawn(Rates::default());

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;
                if action == Action::Render {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        drop(events);
        tui.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, then the screen. A focused search field takes
    /// every key except Ctrl+C.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        if self.landing.captures_input() {
            return self.landing.handle_key_event(key);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        self.landing.handle_key_event(key)
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
                return Ok(());
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
                return Ok(());
            }
            Action::FocusInput => self.controller.set_focused(true),
            Action::UnfocusInput => self.controller.set_focused(false),
            Action::QueryEdited(text) => self.controller.set_text(text.as_str()),
            Action::SelectFilter(filter) => self.controller.select_filter(*filter),
            Action::Submit => self.spawn_submission(),
            _ => {}
        }

        if let Some(follow_up) = self.landing.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    /// The lookup runs off the event loop; its outcome arrives through the
    /// search bridge.
    fn spawn_submission(&self) {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            if let RequestOutcome::Failure(failure) = controller.submit().await {
                debug!(kind = ?failure.kind, "submission failed");
            }
        });
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            area,
        );

        let [content, status] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.landing.render(frame, content);
        self.render_status_bar(frame, status);

        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let indicator = match self.controller.snapshot().outcome() {
            RequestOutcome::Idle => Span::styled("○ ready", theme::muted()),
            RequestOutcome::Loading => {
                Span::styled("◐ searching", Style::default().fg(theme::GOLD))
            }
            RequestOutcome::Success(_) => {
                Span::styled("● found", Style::default().fg(theme::SUCCESS_GREEN))
            }
            RequestOutcome::Failure(_) => Span::styled("✗ failed", theme::error()),
        };

        let mut spans = vec![Span::raw(" "), indicator, Span::styled(" │", theme::key_hint())];
        for (key, hint) in self.landing.key_hints() {
            spans.push(Span::styled(format!(" {key}"), theme::key_hint_key()));
            spans.push(Span::styled(format!(" {hint}"), theme::key_hint()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 56u16.min(area.width.saturating_sub(4));
    let height = u16::try_from(HELP.len() + 4)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(2));

    let help_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    let mut lines = vec![Line::from("")];
    lines.extend(HELP.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), theme::key_hint_key()),
            Span::styled(*description, theme::key_hint()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(block), help_area);
}
