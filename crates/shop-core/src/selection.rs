//! Selection state for the shop.
//!
//! The store holds at most one product and tells its observers about every
//! change, synchronously, before `select` or `deselect` returns.

use std::fmt;

use tracing::debug;

use crate::product::Product;

/// The product currently chosen, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Empty,
    /// A product is selected.
    Holding(Product),
}

impl Selection {
    /// The selected product, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Empty => None,
            Self::Holding(product) => Some(product),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<Product>> for Selection {
    fn from(product: Option<Product>) -> Self {
        product.map_or(Self::Empty, Self::Holding)
    }
}

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Selection)>;

/// Owner of the current selection.
///
/// Transitions:
/// - `Empty --select(p)--> Holding(p)`
/// - `Holding(p) --select(q)--> Holding(q)`
/// - `Holding(p) --deselect--> Empty`
/// - `Empty --deselect--> Empty`
///
/// Observers only hear about actual changes: selecting the product that is
/// already selected, or deselecting when nothing is selected, is silent.
///
/// The store is single-threaded (observers are not `Send`). A host that needs
/// it on several threads must give it one owning thread.
#[derive(Default)]
pub struct SelectionStore {
    current: Selection,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SelectionStore {
    /// Create an empty store with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a product.
    ///
    /// The product is expected to come from the session's catalog; other values
    /// are stored as given.
    pub fn select(&mut self, product: Product) {
        debug!(product = %product.name, "select");
        self.set(Selection::Holding(product));
    }

    /// Clear the selection. Calling this with nothing selected is a no-op.
    pub fn deselect(&mut self) {
        debug!("deselect");
        self.set(Selection::Empty);
    }

    /// The current selection.
    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Register an observer. It runs on every change, after the new value is
    /// stored, in subscription order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn set(&mut self, next: Selection) {
        if self.current == next {
            return;
        }
        self.current = next;
        for (_, observer) in &mut self.observers {
            observer(&self.current);
        }
    }
}
