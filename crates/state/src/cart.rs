//! Cart store.
//!
//! [`CartState`] holds the line items and the pure transitions between
//! states. [`CartStore`] is the shared handle the header, product display,
//! and cart surfaces all read from.

use std::sync::Arc;

use context_demos_core::{CartItem, CurrencyCode, Price, Product, ProductId};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::ContextError;
use crate::provider::{Provider, Subscription};
use crate::scope::{ContextScope, Store};
use crate::seed;

/// Line items in insertion order, keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartState {
    currency: CurrencyCode,
    items: Vec<CartItem>,
}

impl CartState {
    /// A cart holding `items`.
    ///
    /// Items with a zero quantity or priced in another currency are dropped,
    /// and later duplicates of an id are merged into the first, so the
    /// line-item invariants hold from the start.
    #[must_use]
    pub fn new(currency: CurrencyCode, items: Vec<CartItem>) -> Self {
        let mut state = Self {
            currency,
            items: Vec::with_capacity(items.len()),
        };
        for item in items
            .into_iter()
            .filter(|item| item.quantity > 0 && item.price.currency_code == currency)
        {
            match state.position(item.id) {
                Some(index) => {
                    if let Some(existing) = state.items.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => state.items.push(item),
            }
        }
        state
    }

    /// An empty cart.
    #[must_use]
    pub const fn empty(currency: CurrencyCode) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line item for `id`, if present.
    #[must_use]
    pub fn line_item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sum of all quantities (not the number of distinct products).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price × quantity` over all items.
    #[must_use]
    pub fn value(&self) -> Price {
        self.items
            .iter()
            .fold(Price::zero(self.currency), |sum, item| sum.plus(item.subtotal()))
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// State after adding one unit of `product`, or `None` if it is priced
    /// in another currency.
    ///
    /// An existing line item is incremented; otherwise a new one is appended
    /// with quantity 1.
    #[must_use]
    pub fn with_added(&self, product: &Product) -> Option<Self> {
        if product.price.currency_code != self.currency {
            return None;
        }
        let mut next = self.clone();
        match next.position(product.id) {
            Some(index) => {
                if let Some(item) = next.items.get_mut(index) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            None => next.items.push(CartItem::from_product(product)),
        }
        Some(next)
    }

    /// State after removing `id`, or `None` if it is not in the cart.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Option<Self> {
        self.position(id)?;
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);
        Some(next)
    }

    /// State after setting the quantity of `id`.
    ///
    /// A quantity of zero or less removes the item. Returns `None` when the
    /// id is absent or the quantity is already `quantity`.
    #[must_use]
    pub fn with_quantity(&self, id: ProductId, quantity: i64) -> Option<Self> {
        if quantity <= 0 {
            return self.without(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let index = self.position(id)?;
        if self.items.get(index)?.quantity == quantity {
            return None;
        }
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            item.quantity = quantity;
        }
        Some(next)
    }
}

/// Shared handle to the cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    provider: Provider<CartState>,
}

impl Store for CartStore {
    const CONSUMER: &'static str = "use_cart";
    const PROVIDER: &'static str = "CartProvider";
}

impl CartStore {
    /// A store starting from `initial`.
    #[must_use]
    pub fn new(initial: CartState) -> Self {
        Self {
            provider: Provider::new(Self::PROVIDER, initial),
        }
    }

    /// A store holding the seed cart.
    #[must_use]
    pub fn seeded(currency: CurrencyCode) -> Self {
        Self::new(CartState::new(currency, seed::cart_items(currency)))
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CartState> {
        self.provider.snapshot()
    }

    /// Current line items.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.snapshot().items().to_vec()
    }

    /// Current line item for `id`, if any.
    #[must_use]
    pub fn line_item(&self, id: ProductId) -> Option<CartItem> {
        self.snapshot().line_item(id).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Committed change count.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.provider.version()
    }

    /// Add one unit of `product`. Products priced in another currency than
    /// the cart's are ignored.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&self, product: &Product) {
        if !self.provider.update(|state| state.with_added(product)) {
            warn!(
                currency = product.price.currency_code.code(),
                cart_currency = self.snapshot().currency().code(),
                "Ignoring product priced in another currency"
            );
            return;
        }
        debug!(
            quantity = self.line_item(product.id).map_or(0, |item| item.quantity),
            "Added to cart"
        );
    }

    /// Remove the line item for `id`. Absent ids are ignored.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_from_cart(&self, id: ProductId) {
        let changed = self.provider.update(|state| state.without(id));
        debug!(changed, "Removed from cart");
    }

    /// Set the quantity for `id`; zero or less removes the item.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        let changed = self.provider.update(|state| state.with_quantity(id, quantity));
        debug!(changed, "Updated quantity");
    }

    /// Quantity stepper "+": one more unit of an item already in the cart.
    pub fn increment(&self, id: ProductId) {
        if let Some(item) = self.line_item(id) {
            self.update_quantity(id, i64::from(item.quantity) + 1);
        }
    }

    /// Quantity stepper "-": one unit fewer, removing the item at zero.
    pub fn decrement(&self, id: ProductId) {
        if let Some(item) = self.line_item(id) {
            self.update_quantity(id, i64::from(item.quantity) - 1);
        }
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn cart_total(&self) -> u64 {
        self.snapshot().total()
    }

    /// Sum of `price × quantity`.
    #[must_use]
    pub fn cart_value(&self) -> Price {
        self.snapshot().value()
    }

    /// Call `listener` with every new cart snapshot.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<CartState>) + Send + Sync + 'static,
    {
        self.provider.subscribe(listener)
    }

    /// Whether both handles share one cart.
    #[must_use]
    pub fn same_store(&self, other: &Self) -> bool {
        self.provider.same_provider(&other.provider)
    }
}

/// The cart provided to `scope`.
///
/// # Errors
///
/// Returns [`ContextError::MissingProvider`] outside a scope that provides a
/// [`CartStore`].
pub fn use_cart(scope: &ContextScope) -> Result<CartStore, ContextError> {
    scope.use_context::<CartStore>()
}
