//! The session cart store.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{CartPricing, LineItem};
use crate::ids::ProductId;
use crate::money::Money;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// The full set of line items for the current session.
///
/// Items are unique by product id and kept in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    items: Vec<LineItem>,
    revision: u64,
}

impl CartState {
    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of effective mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of price times quantity over all items, unrounded.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CartState) + Send + Sync>;

/// Owns the cart state for one shopping session.
///
/// Every operation is total: unknown ids are ignored, out-of-range
/// quantities are clamped or turned into removals. Subscribers are called
/// once after each mutation that actually changed the cart.
pub struct CartStore {
    state: CartState,
    max_quantity: i64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::with_max_quantity(MAX_QUANTITY_PER_ITEM)
    }

    /// Create an empty cart with a custom per-line quantity cap.
    pub fn with_max_quantity(max_quantity: i64) -> Self {
        Self {
            state: CartState::default(),
            max_quantity: max_quantity.max(1),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Get an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.state.get(id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.state.contains(id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.state.unique_item_count()
    }

    /// Sum of price times quantity over all items.
    pub fn subtotal(&self) -> Money {
        self.state.subtotal()
    }

    /// Per-line pricing breakdown.
    pub fn pricing(&self) -> CartPricing {
        CartPricing::from_state(&self.state)
    }

    /// Per-line quantity cap.
    pub fn max_quantity(&self) -> i64 {
        self.max_quantity
    }

    /// Add an item to the cart.
    ///
    /// If the product is already present its quantity grows by the item's
    /// quantity and the stored name, price and image are kept. Otherwise
    /// the item is appended.
    pub fn add_item(&mut self, item: LineItem) -> &CartState {
        let max = self.max_quantity;
        let quantity = item.quantity.clamp(1, max);

        if let Some(existing) = self.state.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.quantity.saturating_add(quantity).min(max);
            if merged == existing.quantity {
                debug!(product_id = %item.id, max, "cart line already at quantity cap");
                return &self.state;
            }
            existing.quantity = merged;
            debug!(product_id = %item.id, quantity = merged, "cart line incremented");
        } else {
            debug!(product_id = %item.id, quantity, "cart line added");
            self.state.items.push(LineItem { quantity, ..item });
        }

        self.commit()
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: i64) -> &CartState {
        if new_quantity <= 0 {
            return self.remove_item(id);
        }

        let quantity = new_quantity.min(self.max_quantity);
        match self.state.items.iter_mut().find(|i| &i.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                debug!(product_id = %id, quantity, "cart line quantity set");
                self.commit()
            }
            Some(_) => &self.state,
            None => {
                debug!(product_id = %id, "quantity update for product not in cart");
                &self.state
            }
        }
    }

    /// Remove a line. Removing an absent product is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> &CartState {
        let len_before = self.state.items.len();
        self.state.items.retain(|i| &i.id != id);
        if self.state.items.len() < len_before {
            debug!(product_id = %id, "cart line removed");
            self.commit()
        } else {
            &self.state
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) -> &CartState {
        if self.state.items.is_empty() {
            return &self.state;
        }
        self.state.items.clear();
        debug!("cart cleared");
        self.commit()
    }

    /// Register a listener called after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    fn commit(&mut self) -> &CartState {
        self.state.revision += 1;
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        &self.state
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("max_quantity", &self.max_quantity)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
