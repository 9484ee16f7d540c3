//! Application state for the shop TUI.
//!
//! [`ShopApp`] owns the catalog and the selection store for one session. The
//! store's observer marks the app dirty; the event loop redraws before it
//! reads the next event.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;
use shop_core::{
    compose, Catalog, LayoutMode, LayoutPolicy, Product, Selection, SelectionStore, ShopConfig,
    ShopView, Viewport,
};
use tracing::{debug, warn};

use crate::event::Action;
use crate::render::{HitTarget, ShopLayout};
use crate::theme::{BorderSet, IconMode, Theme};

/// Main application state.
#[derive(Debug)]
pub struct ShopApp {
    catalog: Catalog,
    store: SelectionStore,
    policy: LayoutPolicy,
    dp_per_column: f32,
    /// Current terminal size.
    pub viewport: Viewport,
    /// List entry under the keyboard cursor.
    pub cursor: usize,
    /// Theme colors.
    pub theme: Theme,
    /// Border set based on icon mode.
    pub borders: BorderSet,
    /// Should the app quit?
    pub should_quit: bool,
    dirty: Rc<Cell<bool>>,
}

impl ShopApp {
    /// Create an app for a session over `catalog`.
    pub fn new(config: &ShopConfig, catalog: Catalog, viewport: Viewport) -> Self {
        let mut store = SelectionStore::new();
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        Self {
            catalog,
            store,
            policy: config.layout_policy(),
            dp_per_column: config.dp_per_column,
            viewport,
            cursor: 0,
            theme: Theme::from_name(config.theme),
            borders: BorderSet::new(IconMode::from(config.icons)),
            should_quit: false,
            dirty,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        self.store.current()
    }

    /// Layout mode for the current viewport.
    pub fn layout_mode(&self) -> LayoutMode {
        self.policy.decide_viewport(self.viewport, self.dp_per_column)
    }

    /// Compose the view for the current state.
    pub fn view(&self) -> ShopView<'_> {
        compose(&self.catalog, self.store.current(), self.layout_mode())
    }

    /// Full terminal area.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.viewport.columns, self.viewport.rows)
    }

    /// Select a product. Products outside the catalog are accepted but logged.
    pub fn select(&mut self, product: Product) {
        match self.catalog.position(&product) {
            Some(index) => self.cursor = index,
            None => warn!(product = %product.name, "selecting product outside the catalog"),
        }
        self.store.select(product);
    }

    /// Select the product at a display position. Out-of-range positions are ignored.
    pub fn select_at(&mut self, index: usize) {
        if let Some(product) = self.catalog.get(index).cloned() {
            self.select(product);
        }
    }

    pub fn deselect(&mut self) {
        self.store.deselect();
    }

    /// Returns whether a redraw is due, and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Handle terminal resize. The selection is kept whatever the new layout.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        let before = self.layout_mode();
        self.viewport = Viewport::new(columns, rows);
        let after = self.layout_mode();
        if before != after {
            debug!(%before, %after, columns, "layout mode changed");
        }
        self.mark_dirty();
    }

    /// Apply a user action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Cancel => {
                if self.view().has_back() {
                    self.deselect();
                } else {
                    self.should_quit = true;
                }
            }
            Action::Back => {
                if self.view().has_back() {
                    self.deselect();
                }
            }
            Action::Select => {
                if self.view().list().is_some() {
                    self.select_at(self.cursor);
                }
            }
            Action::Pick(index) => {
                if self.view().list().is_some() {
                    self.select_at(index);
                }
            }
            Action::Up => {
                if self.view().list().is_some() && self.cursor > 0 {
                    self.cursor -= 1;
                    self.mark_dirty();
                }
            }
            Action::Down => {
                if self.view().list().is_some() && self.cursor + 1 < self.catalog.len() {
                    self.cursor += 1;
                    self.mark_dirty();
                }
            }
            Action::Click { column, row } => self.handle_click(column, row),
            Action::None => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let target = ShopLayout::compute(self.area(), &self.view())
            .and_then(|layout| layout.hit_test(column, row));
        match target {
            Some(HitTarget::Product(index)) => self.select_at(index),
            Some(HitTarget::Back) => self.deselect(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, NARROW_COLUMNS, WIDE_COLUMNS};

    #[test]
    fn test_defaults() {
        let app = create_test_app(NARROW_COLUMNS);
        assert_eq!(app.selection(), &Selection::Empty);
        assert_eq!(app.cursor, 0);
        assert!(!app.should_quit);
        assert_eq!(app.layout_mode(), LayoutMode::Single);
        assert_eq!(create_test_app(WIDE_COLUMNS).layout_mode(), LayoutMode::Split);
    }

    #[test]
    fn test_enter_selects_cursor_entry() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        assert_eq!(app.selection().product().map(|p| p.name.as_str()), Some("Product B"));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Up);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.handle_action(Action::Down);
        }
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_back_clears_selection_in_single_layout() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Pick(0));
        assert!(app.view().has_back());

        app.handle_action(Action::Back);
        assert_eq!(app.selection(), &Selection::Empty);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_back_ignored_in_split_layout() {
        let mut app = create_test_app(WIDE_COLUMNS);
        app.handle_action(Action::Pick(1));
        app.handle_action(Action::Back);
        assert!(!app.selection().is_empty());
    }

    #[test]
    fn test_cancel_goes_back_then_quits() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Pick(2));

        app.handle_action(Action::Cancel);
        assert!(app.selection().is_empty());
        assert!(!app.should_quit);

        app.handle_action(Action::Cancel);
        assert!(app.should_quit);
    }

    #[test]
    fn test_select_ignored_while_detail_fills_screen() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Pick(0));
        app.handle_action(Action::Pick(2));
        assert_eq!(app.selection().product().map(|p| p.name.as_str()), Some("Product A"));
    }

    #[test]
    fn test_pick_out_of_range() {
        let mut app = create_test_app(WIDE_COLUMNS);
        app.handle_action(Action::Pick(8));
        assert!(app.selection().is_empty());
    }

    #[test]
    fn test_resize_keeps_selection() {
        let mut app = create_test_app(NARROW_COLUMNS);
        app.handle_action(Action::Pick(2));
        assert_eq!(app.layout_mode(), LayoutMode::Single);

        app.handle_resize(WIDE_COLUMNS, 24);
        assert_eq!(app.layout_mode(), LayoutMode::Split);
        assert_eq!(app.selection().product().map(|p| p.name.as_str()), Some("Product C"));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_selection_change_requests_redraw() {
        let mut app = create_test_app(NARROW_COLUMNS);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());

        app.handle_action(Action::Pick(0));
        assert!(app.take_redraw());

        app.handle_action(Action::Back);
        assert!(app.take_redraw());
        // Nothing left to go back from.
        app.handle_action(Action::Back);
        assert!(!app.take_redraw());
    }

    #[test]
    fn test_click_selects_and_back_button_deselects() {
        let mut app = create_test_app(NARROW_COLUMNS);
        // Second card occupies rows 4..=6.
        app.handle_action(Action::Click { column: 10, row: 5 });
        assert_eq!(app.selection().product().map(|p| p.name.as_str()), Some("Product B"));

        // Back button sits in the three rows above the footer.
        let row = app.viewport.rows - 3;
        app.handle_action(Action::Click { column: 10, row });
        assert!(app.selection().is_empty());
    }

    #[test]
    fn test_out_of_catalog_select_keeps_cursor() {
        let mut app = create_test_app(WIDE_COLUMNS);
        app.cursor = 1;
        app.select(Product::new("Gift card", "$25", "Not listed."));
        assert_eq!(app.cursor, 1);
        assert_eq!(app.selection().product().map(|p| p.name.as_str()), Some("Gift card"));
    }
}
