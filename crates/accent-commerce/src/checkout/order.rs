//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::checkout::{Address, AppliedDiscount, CheckoutSummary, ContactInfo};
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Money;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// A placed order.
///
/// Lines and totals are copied out of the cart at placement time, so the
/// order stays intact after the cart is cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number (e.g., "#ORD-7892").
    pub order_number: String,
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Contact details.
    pub contact: ContactInfo,
    /// Shipping address.
    pub shipping_address: Address,
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Discount applied, if any.
    pub discount: Option<AppliedDiscount>,
    /// Totals at placement time.
    pub subtotal: Money,
    pub shipping: Money,
    pub discount_total: Money,
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub(crate) fn from_parts(
        order_number: String,
        user_id: Option<UserId>,
        contact: ContactInfo,
        shipping_address: Address,
        items: &[LineItem],
        discount: Option<AppliedDiscount>,
        summary: &CheckoutSummary,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            order_number,
            user_id,
            contact,
            shipping_address,
            lines: items.iter().map(OrderLine::from).collect(),
            discount,
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            discount_total: summary.discount,
            total: summary.total,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        }
    }
}

/// A line on a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub total: Money,
}

impl From<&LineItem> for OrderLine {
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

    #[test]
    fn test_status_strings() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Completed.as_str(), "completed");
        assert_eq!(OrderStatus::Cancelled.display_name(), "Cancelled");
    }

    #[test]
    fn test_order_line_from_item() {
        let item = LineItem::new(1u64, "A", Money::from_major(3), "")
            .unwrap()
            .with_quantity(4)
            .unwrap();
        let line = OrderLine::from(&item);
        assert_eq!(line.total, Money::from_major(12));
        assert_eq!(line.quantity, 4);
    }
}
