//! UI widgets for the shop.
//!
//! This module provides:
//! - [`ProductList`] - Stacked product cards with a keyboard cursor
//! - [`ProductDetails`] - Name, price and description of one product
//! - [`Placeholder`] - Message shown while nothing is selected
//! - [`BackButton`] - Full-width control that clears the selection

mod back_button;
mod placeholder;
mod product_details;
mod product_list;

pub use back_button::{BackButton, BACK_BUTTON_HEIGHT};
pub use placeholder::Placeholder;
pub use product_details::ProductDetails;
pub use product_list::{card_areas, list_height, ProductList, CARD_HEIGHT};

use ratatui::layout::Rect;

/// Rows of `area` holding a block `height` rows tall, centered vertically.
fn centered_rows(height: u16, area: Rect) -> Rect {
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(area.x, y, area.width, height.min(area.height))
}
