//! Detail view of one product.
//!
//! Name, price and description stacked and centered:
//!
//! ```text
//!            Product A
//!
//!              $100
//!
//!   This is a great product A.
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};
use shop_core::Product;

use super::centered_rows;
use crate::theme::Theme;

const MARGIN: Margin = Margin::new(2, 1);

pub struct ProductDetails<'a> {
    product: &'a Product,
    theme: &'a Theme,
}

impl<'a> ProductDetails<'a> {
    pub fn new(product: &'a Product, theme: &'a Theme) -> Self {
        Self { product, theme }
    }

    /// Rows needed to show every line of `product` in an area `width` wide.
    pub fn required_height(product: &Product, width: u16) -> u16 {
        let inner = width.saturating_sub(2 * MARGIN.horizontal);
        if inner == 0 {
            return u16::MAX;
        }
        let rows = paragraph(product, [Style::default(); 3]).line_count(inner);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(2 * MARGIN.vertical)
    }
}

/// Name, price and description, styled in that order.
fn paragraph(product: &Product, [name, price, description]: [Style; 3]) -> Paragraph<'_> {
    let lines = vec![
        Line::styled(product.name.as_str(), name),
        Line::default(),
        Line::styled(product.price.as_str(), price),
        Line::default(),
        Line::styled(product.description.as_str(), description),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

impl Widget for ProductDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(MARGIN);
        if area.is_empty() {
            return;
        }

        let paragraph = paragraph(
            self.product,
            [
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(self.theme.secondary),
                Style::default().fg(self.theme.text),
            ],
        );
        let height = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
        paragraph.render(centered_rows(height, area), buf);
    }
}
