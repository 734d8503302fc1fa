//! Cart pricing breakdown.

use crate::cart::{CartState, LineItem};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Total item count (sum of quantities).
    pub item_count: i64,
    /// Per-line breakdown in cart order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Build the breakdown for a snapshot.
    pub fn from_state(state: &CartState) -> Self {
        let line_items: Vec<LineItemPricing> =
            state.items().iter().map(LineItemPricing::from).collect();

        Self {
            subtotal: line_items.iter().map(|l| l.total).sum(),
            item_count: state.item_count(),
            line_items,
        }
    }

    /// Share of the subtotal contributed by one product, in percent.
    pub fn share_of(&self, id: &ProductId) -> f64 {
        if self.subtotal.is_zero() {
            return 0.0;
        }
        self.line_items
            .iter()
            .find(|l| &l.product_id == id)
            .map(|l| l.total.amount_minor() as f64 / self.subtotal.amount_minor() as f64 * 100.0)
            .unwrap_or(0.0)
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub total: Money,
}

impl From<&LineItem> for LineItemPricing {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            total: item.line_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;

    #[test]
    fn test_breakdown_matches_store() {
        let mut cart = CartStore::new();
        cart.add_item(
            LineItem::new(1u64, "A", Money::from_major(10), "")
                .unwrap()
                .with_quantity(2)
                .unwrap(),
        );
        cart.add_item(LineItem::new(2u64, "B", Money::from_major(5), "").unwrap());

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal, cart.subtotal());
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line_items[0].total, Money::from_major(20));
        assert!((pricing.share_of(&ProductId::from(1u64)) - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_share_of_empty_cart() {
        let pricing = CartPricing::from_state(&CartState::default());
        assert_eq!(pricing.share_of(&ProductId::new("x")), 0.0);
    }
}
