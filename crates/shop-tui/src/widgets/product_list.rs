//! Product list: one bordered card per product, in catalog order.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use shop_core::Product;

use crate::text::truncate_to_width;
use crate::theme::{BorderSet, Theme};

/// Rows taken by one card (border, name, border).
pub const CARD_HEIGHT: u16 = 3;

/// Rows a list of `count` cards needs: the top inset plus every card.
pub fn list_height(count: usize) -> u16 {
    u16::try_from(count)
        .map_or(u16::MAX, |count| count.saturating_mul(CARD_HEIGHT))
        .saturating_add(1)
}

/// Areas of the cards that fit in `area`, in display order.
///
/// Cards are inset one column on each side and one row from the top. Cards
/// that would not fit completely are left out.
pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
    let inner = area.inner(Margin::new(1, 0));
    let mut cards = Vec::with_capacity(count);
    let mut y = inner.y.saturating_add(1);
    for _ in 0..count {
        if y.saturating_add(CARD_HEIGHT) > inner.bottom() || inner.width < 3 {
            break;
        }
        cards.push(Rect::new(inner.x, y, inner.width, CARD_HEIGHT));
        y += CARD_HEIGHT;
    }
    cards
}

/// List of product cards.
pub struct ProductList<'a> {
    products: &'a [Product],
    cursor: Option<usize>,
    selected: Option<&'a Product>,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> ProductList<'a> {
    pub fn new(products: &'a [Product], theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            products,
            cursor: None,
            selected: None,
            theme,
            borders,
        }
    }

    /// Highlight the card under the keyboard cursor.
    #[must_use]
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Mark the selected product's card.
    #[must_use]
    pub fn selected(mut self, selected: Option<&'a Product>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, (card, product)) in card_areas(area, self.products.len())
            .into_iter()
            .zip(self.products)
            .enumerate()
        {
            let focused = self.cursor == Some(index);
            let (border_set, border_color) = if focused {
                (self.borders.focused(), self.theme.border_focused)
            } else {
                (self.borders.normal(), self.theme.border)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(border_set)
                .border_style(Style::default().fg(border_color));
            let inner = block.inner(card);
            block.render(card, buf);

            let marker = if focused { self.borders.cursor() } else { " " };
            let mut name_style = Style::default().fg(self.theme.text);
            if self.selected == Some(product) {
                name_style = name_style.fg(self.theme.primary).add_modifier(Modifier::BOLD);
            }
            let name = truncate_to_width(&product.name, usize::from(inner.width).saturating_sub(2));
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(self.theme.primary)),
                Span::raw(" "),
                Span::styled(name, name_style),
            ]);
            Paragraph::new(line).render(inner, buf);
        }
    }
}
