//! Products and the fixed catalog they are browsed from.

use serde::{Deserialize, Serialize};

/// A purchasable item.
///
/// Products carry no identifier; two products are the same product when all
/// three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also used to look a product up from the command line.
    pub name: String,
    /// Price, already formatted for display (e.g. "$100").
    pub price: String,
    /// Free-form description shown in the detail view.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable list of products.
///
/// Insertion order is display order. A catalog is built once per session and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl Catalog {
    /// Build a catalog from an ordered list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The three products the shop ships with.
    pub fn reference() -> Self {
        Self::new(vec![
            Product::new("Product A", "$100", "This is a great product A."),
            Product::new("Product B", "$150", "This is product B with more features."),
            Product::new("Product C", "$200", "Premium product C."),
        ])
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at a display position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Display position of a product, compared structurally.
    pub fn position(&self, product: &Product) -> Option<usize> {
        self.products.iter().position(|p| p == product)
    }

    /// Whether the product belongs to this catalog.
    pub fn contains(&self, product: &Product) -> bool {
        self.position(product).is_some()
    }

    /// First product whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
