//! Drawing a [`ShopView`] into a terminal buffer.
//!
//! Regions:
//! 1. Body (everything but the last row)
//!    - Single/list: product cards
//!    - Single/detail: product detail, Back button at the bottom
//!    - Split: cards (40%) │ detail or placeholder (60%)
//! 2. Footer hints (last row)
//!
//! [`ShopLayout`] is computed once per frame and shared by drawing and mouse
//! hit-testing, so a click always lands on what was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use shop_core::{ShopView, BACK_LABEL, PLACEHOLDER_TEXT};

use crate::theme::{BorderSet, Theme};
use crate::widgets::{
    card_areas, list_height, BackButton, Placeholder, ProductDetails, ProductList,
    BACK_BUTTON_HEIGHT, CARD_HEIGHT,
};

const FOOTER_HEIGHT: u16 = 1;

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 20;
/// Minimum terminal height: the reference catalog's three cards below the
/// list inset, plus the footer. The detail view with its Back button needs
/// the same at [`MIN_WIDTH`] and up.
pub const MIN_HEIGHT: u16 = 1 + 3 * CARD_HEIGHT + FOOTER_HEIGHT;

// Fill weights 2:3 give the list 0.4 and the detail region 0.6 of the width.
const LIST_FILL: u16 = 2;
const DETAIL_FILL: u16 = 3;

/// A clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Product card at a display position.
    Product(usize),
    Back,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLayout {
    pub footer: Rect,
    pub list: Option<Rect>,
    pub divider: Option<Rect>,
    pub detail: Option<Rect>,
    pub back: Option<Rect>,
    pub cards: Vec<Rect>,
}

impl ShopLayout {
    /// Lay out `view` in `area`.
    ///
    /// Returns `None` when the area is below the minimum size, or when some
    /// region cannot show all of its content: every card of the list, every
    /// wrapped line of the detail or placeholder.
    pub fn compute(area: Rect, view: &ShopView<'_>) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

        let mut layout = Self {
            footer,
            list: None,
            divider: None,
            detail: None,
            back: None,
            cards: Vec::new(),
        };

        match view {
            ShopView::List { .. } => {
                layout.list = Some(body);
            }
            ShopView::Detail { .. } => {
                let [detail, back] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(BACK_BUTTON_HEIGHT)])
                        .areas(body);
                layout.detail = Some(detail);
                layout.back = Some(back.inner(Margin::new(1, 0)));
            }
            ShopView::Split { .. } => {
                let [list, divider, detail] = Layout::horizontal([
                    Constraint::Fill(LIST_FILL),
                    Constraint::Length(1),
                    Constraint::Fill(DETAIL_FILL),
                ])
                .areas(body);
                layout.list = Some(list);
                layout.divider = Some(divider);
                layout.detail = Some(detail);
            }
        }

        if !layout.fits(view) {
            return None;
        }

        if let (Some(list), Some(products)) = (layout.list, view.list()) {
            layout.cards = card_areas(list, products.len());
        }

        Some(layout)
    }

    fn fits(&self, view: &ShopView<'_>) -> bool {
        let list_fits = match (self.list, view.list()) {
            (Some(list), Some(products)) => list.height >= list_height(products.len()),
            _ => true,
        };
        let detail_fits = match (self.detail, view.detail()) {
            (Some(detail), Some(product)) => {
                detail.height >= ProductDetails::required_height(product, detail.width)
            }
            (Some(detail), None) => {
                detail.height >= Placeholder::required_height(PLACEHOLDER_TEXT, detail.width)
            }
            (None, _) => true,
        };
        list_fits && detail_fits
    }

    /// What sits under a terminal cell, if anything clickable.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if let Some(index) = self.cards.iter().position(|card| card.contains(position)) {
            return Some(HitTarget::Product(index));
        }
        self.back
            .filter(|back| back.contains(position))
            .map(|_| HitTarget::Back)
    }
}

/// Everything a frame needs apart from the view itself.
pub struct RenderContext<'a> {
    pub cursor: usize,
    pub theme: &'a Theme,
    pub borders: &'a BorderSet,
}

/// Draw the shop.
pub fn render_shop(view: &ShopView<'_>, ctx: &RenderContext<'_>, area: Rect, buf: &mut Buffer) {
    let Some(layout) = ShopLayout::compute(area, view) else {
        render_too_small(ctx.theme, area, buf);
        return;
    };

    if let (Some(list), Some(products)) = (layout.list, view.list()) {
        ProductList::new(products, ctx.theme, ctx.borders)
            .cursor(ctx.cursor)
            .selected(view.detail())
            .render(list, buf);
    }

    if let Some(divider) = layout.divider {
        let style = Style::default().fg(ctx.theme.border);
        for y in divider.top()..divider.bottom() {
            buf.set_string(divider.x, y, ctx.borders.divider(), style);
        }
    }

    if let Some(detail) = layout.detail {
        match view.detail() {
            Some(product) => ProductDetails::new(product, ctx.theme).render(detail, buf),
            None => Placeholder::new(PLACEHOLDER_TEXT, ctx.theme).render(detail, buf),
        }
    }

    if let Some(back) = layout.back {
        BackButton::new(BACK_LABEL, ctx.theme, ctx.borders).render(back, buf);
    }

    render_footer(view, ctx.theme, layout.footer, buf);
}

/// Footer: layout mode, then the keys that do something right now.
fn render_footer(view: &ShopView<'_>, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let hints: &[(&str, &str)] = if view.has_back() {
        &[("Esc", "back"), ("q", "quit")]
    } else {
        &[("↑/↓", "move"), ("Enter", "select"), ("q", "quit")]
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", view.layout_mode()), Style::default().fg(theme.muted)),
        Span::styled("│", Style::default().fg(theme.border)),
    ];
    for (key, action) in hints {
        spans.push(Span::styled(format!(" [{key}]"), Style::default().fg(theme.primary)));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(theme.subtext)));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Render "terminal too small" warning.
fn render_too_small(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let message = if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT})")
    } else {
        "Terminal too small for this view".to_string()
    };
    Paragraph::new(message)
        .style(Style::default().fg(theme.warning))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render, NARROW_COLUMNS};
    use insta::assert_snapshot;
    use shop_core::{compose, Catalog, LayoutMode, Selection, LIST_WEIGHT};

    fn footer_line(screen: &str) -> String {
        screen.lines().last().unwrap_or_default().trim().to_string()
    }

    #[test]
    fn test_fill_weights_match_list_share() {
        let share = f32::from(LIST_FILL) / f32::from(LIST_FILL + DETAIL_FILL);
        assert!((share - LIST_WEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_too_small() {
        let catalog = Catalog::reference();
        let view = compose(&catalog, &Selection::Empty, LayoutMode::Single);
        assert!(ShopLayout::compute(Rect::new(0, 0, 19, 24), &view).is_none());
        assert!(ShopLayout::compute(Rect::new(0, 0, 80, MIN_HEIGHT - 1), &view).is_none());
        assert!(ShopLayout::compute(Rect::new(0, 0, 20, MIN_HEIGHT), &view).is_some());
        assert_eq!(MIN_HEIGHT, 11);
    }

    #[test]
    fn test_floor_height_fits_every_card() {
        let catalog = Catalog::reference();
        let view = compose(&catalog, &Selection::Empty, LayoutMode::Single);
        let layout = ShopLayout::compute(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT), &view).unwrap();
        assert_eq!(layout.cards.len(), catalog.len());
    }

    #[test]
    fn test_detail_that_cannot_fit_is_too_small() {
        let catalog = Catalog::reference();
        let selection = Selection::Holding(catalog.get(1).unwrap().clone());
        let view = compose(&catalog, &selection, LayoutMode::Single);

        // At 20 columns the description of B wraps to three rows.
        assert!(ShopLayout::compute(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT), &view).is_none());
        assert!(ShopLayout::compute(Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT + 2), &view).is_some());
        assert!(ShopLayout::compute(Rect::new(0, 0, 46, MIN_HEIGHT), &view).is_some());
    }

    #[test]
    fn test_split_regions() {
        let catalog = Catalog::reference();
        let view = compose(&catalog, &Selection::Empty, LayoutMode::Split);
        let layout = ShopLayout::compute(Rect::new(0, 0, 101, 24), &view).unwrap();

        let list = layout.list.unwrap();
        let divider = layout.divider.unwrap();
        let detail = layout.detail.unwrap();
        assert_eq!(list.width, 40);
        assert_eq!(divider, Rect::new(40, 0, 1, 23));
        assert_eq!(detail.width, 60);
        assert!(layout.back.is_none());
        assert_eq!(layout.footer, Rect::new(0, 23, 101, 1));
    }

    #[test]
    fn test_detail_regions() {
        let catalog = Catalog::reference();
        let selection = Selection::Holding(catalog.get(0).unwrap().clone());
        let view = compose(&catalog, &selection, LayoutMode::Single);
        let layout = ShopLayout::compute(Rect::new(0, 0, 40, 20), &view).unwrap();

        assert!(layout.list.is_none());
        assert!(layout.cards.is_empty());
        assert_eq!(layout.back, Some(Rect::new(1, 16, 38, 3)));
    }

    #[test]
    fn test_hit_test() {
        let catalog = Catalog::reference();
        let view = compose(&catalog, &Selection::Empty, LayoutMode::Single);
        let layout = ShopLayout::compute(Rect::new(0, 0, 40, 20), &view).unwrap();

        // Cards start one row down and three rows apart.
        assert_eq!(layout.hit_test(10, 2), Some(HitTarget::Product(0)));
        assert_eq!(layout.hit_test(10, 5), Some(HitTarget::Product(1)));
        assert_eq!(layout.hit_test(1, 9), Some(HitTarget::Product(2)));
        assert_eq!(layout.hit_test(0, 2), None);
        assert_eq!(layout.hit_test(10, 12), None);
    }

    #[test]
    fn test_hit_test_back() {
        let catalog = Catalog::reference();
        let selection = Selection::Holding(catalog.get(1).unwrap().clone());
        let view = compose(&catalog, &selection, LayoutMode::Single);
        let layout = ShopLayout::compute(Rect::new(0, 0, 40, 20), &view).unwrap();

        assert_eq!(layout.hit_test(20, 17), Some(HitTarget::Back));
        assert_eq!(layout.hit_test(20, 5), None);
    }

    #[test]
    fn test_footer_hints() {
        let mut app = create_test_app(NARROW_COLUMNS);
        assert_snapshot!(footer_line(&render(&app)), @"single │ [↑/↓] move [Enter] select [q] quit");

        app.handle_action(Action::Pick(0));
        assert_snapshot!(footer_line(&render(&app)), @"single │ [Esc] back [q] quit");
    }
}
