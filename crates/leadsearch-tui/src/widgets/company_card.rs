//! Result card for a found company.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use leadsearch_core::CompanyView;

use crate::theme;

/// Four field rows plus borders.
pub const CARD_HEIGHT: u16 = 6;

const LABEL_WIDTH: usize = 21;

pub struct CompanyCard<'a> {
    pub view: &'a CompanyView,
}

impl Widget for CompanyCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Resultado ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let lines: Vec<Line> = self
            .view
            .fields()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!(" {label:<LABEL_WIDTH$}"), theme::field_label()),
                    Span::styled(value.to_owned(), theme::body()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
