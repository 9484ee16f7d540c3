//! Full-width Back button shown under the detail view in single-pane layout.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

/// Rows taken by the button (border, label, border).
pub const BACK_BUTTON_HEIGHT: u16 = 3;

pub struct BackButton<'a> {
    label: &'a str,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> BackButton<'a> {
    pub fn new(label: &'a str, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            label,
            theme,
            borders,
        }
    }
}

impl Widget for BackButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border_focused));

        Paragraph::new(self.label)
            .style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
