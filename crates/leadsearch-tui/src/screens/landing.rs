//! Landing screen: the whole catalog page in one vertical scroll view.
//!
//! The form fields (text, filter, focus) are owned here and pushed to the
//! controller as actions. The outcome (loading, error, result) comes back
//! from the controller through the search bridge.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect, Size},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use throbber_widgets_tui::ThrobberState;
use tui_input::{Input, InputRequest};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use leadsearch_core::catalog::{
    BRAND, COPYRIGHT, CTA_LABEL, FEATURE_CARDS, FOOTER_COLUMNS, HERO_SUBTITLE, HERO_TITLE,
    NAV_ITEMS, STATE_COUNTS, STATES_TITLE, TOTAL_CAPTION, TOTAL_COMPANIES,
};
use leadsearch_core::{CompanyView, FilterKind, SearchState};

use crate::action::Action;
use crate::app::STATUS_BAR_HEIGHT;
use crate::component::Component;
use crate::theme;
use crate::widgets::{CARD_HEIGHT, CompanyCard, PANEL_HEIGHT, SearchPanel};

/// Widest the search panel grows on large terminals.
const PANEL_MAX_WIDTH: u16 = 90;

/// Page sections, top to bottom. Heights include the gap below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Hero,
    Total,
    Search,
    Result,
    Features,
    States,
    Cta,
    Footer,
}

impl Section {
    fn height(self) -> u16 {
        match self {
            Self::Header | Self::Hero | Self::Total => 3,
            Self::Search => PANEL_HEIGHT + 1,
            Self::Result => CARD_HEIGHT + 1,
            Self::Features => 6,
            Self::States => 5,
            Self::Cta => 2,
            Self::Footer => 8,
        }
    }
}

#[derive(Default)]
pub struct LandingScreen {
    input: Input,
    filter: FilterKind,
    input_focused: bool,
    /// Latest state published by the controller.
    search: SearchState,
    throbber: ThrobberState,
    scroll: u16,
    viewport_height: u16,
}

impl LandingScreen {
    fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Header, Section::Hero, Section::Total, Section::Search];
        if self.search.result().is_some() {
            sections.push(Section::Result);
        }
        sections.extend([
            Section::Features,
            Section::States,
            Section::Cta,
            Section::Footer,
        ]);
        sections
    }

    fn content_height(&self) -> u16 {
        self.sections().iter().map(|s| s.height()).sum()
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(2).max(1)
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.max_scroll());
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => return Some(Action::UnfocusInput),
            KeyCode::Enter => return Some(Action::Submit),
            KeyCode::Tab => return Some(Action::SelectFilter(self.filter.next())),
            KeyCode::BackTab => return Some(Action::SelectFilter(self.filter.prev())),
            _ => {}
        }

        let request = input_request(key)?;
        let before = self.input.value().to_owned();
        self.input.handle(request);
        (self.input.value() != before).then(|| Action::QueryEdited(self.input.value().to_owned()))
    }

    // ── Sections ─────────────────────────────────────────────────────

    fn render_section(&self, view: &mut ScrollView, section: Section, area: Rect) {
        match section {
            Section::Header => render_header(view, area),
            Section::Hero => view.render_widget(
                Paragraph::new(vec![
                    Line::styled(HERO_TITLE, theme::title_style()),
                    Line::styled(HERO_SUBTITLE, theme::muted()),
                ])
                .alignment(Alignment::Center),
                area,
            ),
            Section::Total => view.render_widget(
                Paragraph::new(vec![
                    Line::styled(TOTAL_COMPANIES, theme::figure()),
                    Line::styled(TOTAL_CAPTION, theme::muted()),
                ])
                .alignment(Alignment::Center),
                area,
            ),
            Section::Search => view.render_widget(
                SearchPanel {
                    filter: self.filter,
                    input: &self.input,
                    focused: self.input_focused,
                    loading: self.search.is_loading(),
                    error: self.search.error(),
                    throbber: &self.throbber,
                },
                centered(top(area, PANEL_HEIGHT), PANEL_MAX_WIDTH),
            ),
            Section::Result => {
                if let Some(record) = self.search.result() {
                    let view_model = CompanyView::from(record);
                    view.render_widget(
                        CompanyCard { view: &view_model },
                        centered(top(area, CARD_HEIGHT), PANEL_MAX_WIDTH),
                    );
                }
            }
            Section::Features => render_features(view, area),
            Section::States => render_states(view, area),
            Section::Cta => view.render_widget(
                Paragraph::new(Span::styled(format!("  {CTA_LABEL}  "), theme::button()))
                    .alignment(Alignment::Center),
                top(area, 1),
            ),
            Section::Footer => render_footer(view, area),
        }
    }
}

impl Component for LandingScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.input_focused {
            return Ok(self.handle_input_key(key));
        }

        let action = match key.code {
            KeyCode::Char('/' | 'i') | KeyCode::Tab => Some(Action::FocusInput),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char(c @ '1'..='3') => filter_by_number(c).map(Action::SelectFilter),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectFilter(self.filter.prev())),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectFilter(self.filter.next())),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollBottom),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::FocusInput => self.input_focused = true,
            Action::UnfocusInput => self.input_focused = false,
            Action::SelectFilter(filter) => self.filter = *filter,
            Action::SearchStateChanged(state) => {
                self.search = SearchState::clone(state);
                self.scroll_to(self.scroll);
            }
            Action::Tick => {
                if self.search.is_loading() {
                    self.throbber.calc_next();
                }
            }
            Action::Resize(_, height) => {
                self.viewport_height = height.saturating_sub(STATUS_BAR_HEIGHT);
                self.scroll_to(self.scroll);
            }
            Action::ScrollDown => self.scroll_to(self.scroll.saturating_add(1)),
            Action::ScrollUp => self.scroll_to(self.scroll.saturating_sub(1)),
            Action::PageDown => self.scroll_to(self.scroll.saturating_add(self.page())),
            Action::PageUp => self.scroll_to(self.scroll.saturating_sub(self.page())),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = self.max_scroll(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        // Rightmost column is left for the scrollbar
        let width = area.width.saturating_sub(1);
        let sections = self.sections();
        let height = self.content_height();

        let mut view = ScrollView::new(Size::new(width, height))
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let page = Rect::new(0, 0, width, height);
        let content = Rect {
            x: page.x + 2,
            width: page.width.saturating_sub(4),
            ..page
        };
        let rows = Layout::vertical(sections.iter().map(|s| Constraint::Length(s.height())))
            .split(content);

        for (section, row) in sections.iter().zip(rows.iter()) {
            self.render_section(&mut view, *section, *row);
        }

        let mut state = ScrollViewState::default();
        state.set_offset(Position::new(0, self.scroll));
        frame.render_stateful_widget(view, area, &mut state);
    }

    fn captures_input(&self) -> bool {
        self.input_focused
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.input_focused {
            vec![("Enter", "search"), ("Tab", "filter"), ("Esc", "leave field")]
        } else {
            vec![
                ("/", "type"),
                ("1-3", "filter"),
                ("j/k", "scroll"),
                ("?", "help"),
                ("q", "quit"),
            ]
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn filter_by_number(c: char) -> Option<FilterKind> {
    let index = usize::try_from(c.to_digit(10)?).ok()?.checked_sub(1)?;
    FilterKind::all().nth(index)
}

fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

fn top(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}

fn centered(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_header(view: &mut ScrollView, area: Rect) {
    let bar = top(area, 2);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::border_default());
    let inner = block.inner(bar);
    view.render_widget(block, bar);

    let nav = Line::from(
        NAV_ITEMS
            .iter()
            .map(|item| Span::styled(format!("   {item}"), theme::body()))
            .collect::<Vec<_>>(),
    );
    let nav_width = u16::try_from(nav.width()).unwrap_or(inner.width);
    let [brand, links] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(nav_width)]).areas(inner);

    view.render_widget(Paragraph::new(Span::styled(BRAND, theme::brand())), brand);
    view.render_widget(Paragraph::new(nav), links);
}

fn render_features(view: &mut ScrollView, area: Rect) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .split(top(area, 5));

    for (card, slot) in FEATURE_CARDS.iter().zip(cards.iter()) {
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        view.render_widget(
            Paragraph::new(Span::styled(card.description, theme::muted()))
                .wrap(Wrap { trim: true })
                .block(block),
            *slot,
        );
    }
}

fn render_states(view: &mut ScrollView, area: Rect) {
    let panel = top(area, 4);
    let block = Block::default()
        .title(format!(" {STATES_TITLE} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    let inner = block.inner(panel);
    view.render_widget(block, panel);

    let rows = Layout::vertical([Constraint::Length(1); 2]).split(inner);
    for (states, row) in STATE_COUNTS.chunks(4).zip(rows.iter()) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(*row);
        for (state, cell) in states.iter().zip(cells.iter()) {
            view.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!(" {}", state.uf), theme::brand()),
                    Span::styled(format!("  {}", state.companies), theme::body()),
                ])),
                *cell,
            );
        }
    }
}

fn render_footer(view: &mut ScrollView, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    view.render_widget(block, area);

    let [columns, _, copyright] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let slots = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(columns);
    for (column, slot) in FOOTER_COLUMNS.iter().zip(slots.iter()) {
        let mut lines = vec![Line::styled(column.title, theme::title_style())];
        lines.extend(column.links.iter().map(|link| Line::styled(*link, theme::muted())));
        view.render_widget(Paragraph::new(lines), *slot);
    }

    view.render_widget(
        Paragraph::new(Span::styled(COPYRIGHT, theme::muted())).alignment(Alignment::Center),
        copyright,
    );
}
