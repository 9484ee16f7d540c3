//! shop-core: Toolkit-independent model for the two-pane shop
//!
//! This crate provides everything the shop needs apart from drawing:
//! - The fixed product catalog
//! - The selection store with synchronous observers
//! - The width breakpoint that picks single or split layout
//! - View composition into a renderable tree
//! - Configuration loading

pub mod config;
pub mod layout;
pub mod product;
pub mod selection;
pub mod view;

// Re-export commonly used types
pub use config::{ConfigError, IconPreference, ShopConfig, ThemeName};
pub use layout::{LayoutMode, LayoutPolicy, Viewport, DEFAULT_BREAKPOINT_DP, DEFAULT_DP_PER_COLUMN};
pub use product::{Catalog, Product};
pub use selection::{Selection, SelectionStore, SubscriptionId};
pub use view::{compose, ShopView, BACK_LABEL, DETAIL_WEIGHT, LIST_WEIGHT, PLACEHOLDER_TEXT};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
