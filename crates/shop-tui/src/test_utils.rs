//! Test utilities for shop-tui rendering and interaction tests.

use shop_core::{Catalog, ShopConfig, Viewport};

use crate::app::ShopApp;
use crate::headless::render_to_string;

/// 375 dp at 8 dp per column, rounded down.
pub const NARROW_COLUMNS: u16 = 46;

/// 800 dp at 8 dp per column.
pub const WIDE_COLUMNS: u16 = 100;

/// Default terminal height for tests.
pub const TEST_ROWS: u16 = 24;

/// Create a test app over the reference catalog with default config.
pub fn create_test_app(columns: u16) -> ShopApp {
    ShopApp::new(
        &ShopConfig::default(),
        Catalog::reference(),
        Viewport::new(columns, TEST_ROWS),
    )
}

/// Render the app and return the screen text.
pub fn render(app: &ShopApp) -> String {
    render_to_string(app).expect("Failed to render test frame")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app(WIDE_COLUMNS);
        assert_eq!(app.viewport, Viewport::new(WIDE_COLUMNS, TEST_ROWS));
        assert_eq!(app.catalog().len(), 3);
    }

    #[test]
    fn test_render_has_one_line_per_row() {
        let app = create_test_app(NARROW_COLUMNS);
        assert_eq!(render(&app).lines().count(), usize::from(TEST_ROWS));
    }
}
