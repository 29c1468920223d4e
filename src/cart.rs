//! Cart

use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use tracing::debug;

use crate::products::ProductId;

/// A single cart line: one product with an aggregated quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: ProductId,
    name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    fn new(product: ProductId, name: String, unit_price: Decimal) -> Self {
        Self {
            product,
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Display name captured when the product was first added.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price for a single unit.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Number of units of this product in the cart.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price for the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Cart
///
/// Lines are kept in first-add order and hold one entry per product id. The
/// running `total_count` is updated in the same call as every mutation, so
/// the two can never be observed out of step.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    total_count: u64,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total_count: 0,
        }
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart has its quantity incremented; its name
    /// and unit price keep the values captured on first add. A new product is
    /// appended to the end. Returns the quantity of the affected line after
    /// the add.
    pub fn add_item(
        &mut self,
        product: &ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
    ) -> u32 {
        let quantity = if let Some(line) =
            self.items.iter_mut().find(|line| line.product == *product)
        {
            line.quantity += 1;
            line.quantity
        } else {
            self.items
                .push(LineItem::new(product.clone(), name.into(), unit_price));
            1
        };

        self.total_count += 1;

        debug!(product = %product, quantity, total_count = self.total_count, "item added");

        self.debug_check_count();

        quantity
    }

    /// Remove a product's line entirely, regardless of its quantity.
    ///
    /// Removing a product that is not in the cart is a no-op. Returns the
    /// removed line, if any.
    pub fn remove_item(&mut self, product: &ProductId) -> Option<LineItem> {
        let idx = self.items.iter().position(|line| line.product == *product)?;
        let line = self.items.remove(idx);

        self.total_count -= u64::from(line.quantity);

        debug!(
            product = %product,
            removed_quantity = line.quantity,
            total_count = self.total_count,
            "item removed"
        );

        self.debug_check_count();

        Some(line)
    }

    /// Remove every line and reset the running count.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_count = 0;

        debug!("cart cleared");
    }

    /// Lookup the line for a product.
    #[must_use]
    pub fn line(&self, product: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.product == *product)
    }

    /// The cart lines in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the cart lines in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running count of units across all lines.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn debug_check_count(&self) {
        debug_assert_eq!(
            self.total_count,
            self.items
                .iter()
                .map(|line| u64::from(line.quantity))
                .sum::<u64>(),
            "total_count must equal the sum of line quantities"
        );
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cheaply clonable handle to a cart shared between sequences.
///
/// Every operation locks, mutates synchronously and unlocks, so an
/// interleaved sequence can never observe a mutation half applied.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Create a handle to a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Run a closure against the cart under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        // Cart mutations never panic partway through, so a poisoned lock
        // still holds a consistent cart.
        let mut cart = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        f(&mut cart)
    }

    /// Add one unit of a product. See [`Cart::add_item`].
    pub fn add_item(
        &self,
        product: &ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
    ) -> u32 {
        let name = name.into();

        self.with(|cart| cart.add_item(product, name, unit_price))
    }

    /// Remove a product's line. See [`Cart::remove_item`].
    pub fn remove_item(&self, product: &ProductId) -> Option<LineItem> {
        self.with(|cart| cart.remove_item(product))
    }

    /// Remove every line and reset the running count.
    pub fn clear(&self) {
        self.with(Cart::clear);
    }

    /// Lookup the line for a product, cloned out of the cart.
    #[must_use]
    pub fn line(&self, product: &ProductId) -> Option<LineItem> {
        self.with(|cart| cart.line(product).cloned())
    }

    /// Snapshot of the cart lines in display order.
    ///
    /// The snapshot is a copy; later mutations do not show through it.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.with(|cart| cart.items().to_vec())
    }

    /// Running count of units across all lines.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.with(|cart| cart.total_count())
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with(|cart| cart.len())
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with(|cart| cart.is_empty())
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.with(|cart| cart.total())
    }
}
