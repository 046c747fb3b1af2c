//! Search panel: filter toggles, text field, submit button, inline error.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Tabs, Widget},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_input::Input;

use leadsearch_core::FilterKind;
use leadsearch_core::catalog::{SEARCH_PLACEHOLDER, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};

use crate::theme;

/// Rows the panel occupies, borders included.
pub const PANEL_HEIGHT: u16 = 7;

const BUTTON_WIDTH: u16 = 18;

pub struct SearchPanel<'a> {
    pub filter: FilterKind,
    pub input: &'a Input,
    pub focused: bool,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub throbber: &'a ThrobberState,
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_row, field_row, error_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let selected = FilterKind::all()
            .position(|f| f == self.filter)
            .unwrap_or_default();
        Tabs::new(FilterKind::all().map(|f| format!(" {} ", f.label())))
            .select(selected)
            .style(theme::tab_inactive())
            .highlight_style(theme::tab_active())
            .divider(" ")
            .render(tabs_row, buf);

        let [field, button] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
                .areas(field_row);
        self.render_field(field, buf);
        self.render_button(button, buf);

        if let Some(message) = self.error {
            Paragraph::new(Span::styled(message, theme::error())).render(error_row, buf);
        }
    }
}

impl SearchPanel<'_> {
    fn render_field(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(input_line(self.input, self.focused, usize::from(inner.width)))
            .render(inner, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().style(theme::button());
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, label_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        if self.loading {
            let throbber = Throbber::default()
                .label(SUBMIT_LABEL_LOADING)
                .style(theme::button())
                .throbber_style(theme::button());
            let [_, spinner] =
                Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(label_row);
            StatefulWidget::render(throbber, spinner, buf, &mut self.throbber.clone());
        } else {
            Paragraph::new(SUBMIT_LABEL)
                .style(theme::button())
                .alignment(Alignment::Center)
                .render(label_row, buf);
        }
    }
}

/// Text of the field. Unfocused and empty shows the placeholder; focused
/// shows a block cursor and scrolls so the cursor stays visible.
fn input_line(input: &Input, focused: bool, width: usize) -> Line<'static> {
    let value = input.value();
    if !focused {
        return if value.is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, theme::muted()))
        } else {
            Line::from(Span::styled(value.to_owned(), theme::body()))
        };
    }

    let cursor = input.cursor();
    let start = (cursor + 1).saturating_sub(width);

    let mut chars = value.chars().skip(start);
    let before: String = chars.by_ref().take(cursor.saturating_sub(start)).collect();
    let at = chars.next().unwrap_or(' ');
    let after: String = chars.collect();

    Line::from(vec![
        Span::styled(before, theme::body()),
        Span::styled(at.to_string(), theme::body().add_modifier(Modifier::REVERSED)),
        Span::styled(after, theme::body()),
    ])
}
