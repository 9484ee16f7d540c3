//! View composition.
//!
//! [`compose`] turns the three pieces of state into a [`ShopView`] tree. The
//! tree says what is on screen; front ends decide how to draw it.

use crate::layout::LayoutMode;
use crate::product::{Catalog, Product};
use crate::selection::Selection;

/// Share of the width given to the list in split layout.
pub const LIST_WEIGHT: f32 = 0.4;
/// Share of the width given to the detail region in split layout.
pub const DETAIL_WEIGHT: f32 = 0.6;
/// Shown in the detail region of split layout while nothing is selected.
pub const PLACEHOLDER_TEXT: &str = "Select a product to view details.";
/// Label of the control that clears the selection in single layout.
pub const BACK_LABEL: &str = "Back";

/// What the shop shows for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopView<'a> {
    /// Single pane, nothing selected: the full list.
    List { products: &'a [Product] },
    /// Single pane, product selected: its detail and a Back control.
    Detail { product: &'a Product },
    /// Split pane: the list, then the detail or the placeholder.
    Split {
        products: &'a [Product],
        detail: Option<&'a Product>,
    },
}

impl<'a> ShopView<'a> {
    pub fn layout_mode(&self) -> LayoutMode {
        match self {
            Self::List { .. } | Self::Detail { .. } => LayoutMode::Single,
            Self::Split { .. } => LayoutMode::Split,
        }
    }

    /// The listed products, if the list is visible.
    pub fn list(&self) -> Option<&'a [Product]> {
        match *self {
            Self::List { products } | Self::Split { products, .. } => Some(products),
            Self::Detail { .. } => None,
        }
    }

    /// The product whose detail is visible, if any.
    pub fn detail(&self) -> Option<&'a Product> {
        match *self {
            Self::Detail { product } => Some(product),
            Self::Split { detail, .. } => detail,
            Self::List { .. } => None,
        }
    }

    /// Whether the Back control is visible.
    pub fn has_back(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }

    /// Whether the placeholder message is visible.
    pub fn shows_placeholder(&self) -> bool {
        matches!(self, Self::Split { detail: None, .. })
    }
}

/// Compose the view for the current state.
pub fn compose<'a>(
    catalog: &'a Catalog,
    selection: &'a Selection,
    mode: LayoutMode,
) -> ShopView<'a> {
    let products = catalog.products();
    match (mode, selection.product()) {
        (LayoutMode::Single, None) => ShopView::List { products },
        (LayoutMode::Single, Some(product)) => ShopView::Detail { product },
        (LayoutMode::Split, detail) => ShopView::Split { products, detail },
    }
}
