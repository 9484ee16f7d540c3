//! Message for the detail region while nothing is selected.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::centered_rows;
use crate::theme::Theme;

const MARGIN: Margin = Margin::new(2, 0);

pub struct Placeholder<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> Placeholder<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }

    /// Rows needed to show all of `text` in an area `width` wide.
    pub fn required_height(text: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(2 * MARGIN.horizontal);
        if inner == 0 {
            return u16::MAX;
        }
        u16::try_from(paragraph(text).line_count(inner)).unwrap_or(u16::MAX)
    }
}

fn paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(MARGIN);
        if area.is_empty() {
            return;
        }

        let paragraph = paragraph(self.text).style(
            Style::default()
                .fg(self.theme.subtext)
                .add_modifier(Modifier::BOLD),
        );
        let height = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
        paragraph.render(centered_rows(height, area), buf);
    }
}
