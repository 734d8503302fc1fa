//! Checkout: totals, discount codes and order placement.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cart::{CartState, CartStore};
use crate::checkout::discount::find_code;
use crate::checkout::{Address, AppliedDiscount, ContactInfo, DiscountCode, Order};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::UserId;
use crate::money::Money;

/// Totals shown on the checkout page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Total item count (sum of quantities).
    pub item_count: i64,
    /// Cart subtotal.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping: Money,
    /// Discount taken off the subtotal.
    pub discount: Money,
    /// subtotal + shipping - discount, never negative.
    pub total: Money,
    /// Applied discount code, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

impl CheckoutSummary {
    /// Check if a discount reduced the total.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// Checkout state for one session.
///
/// Holds the flat shipping fee, the table of recognized discount codes and
/// the code the shopper applied. The discount amount is recomputed from the
/// live subtotal, so editing the cart after applying a code keeps the
/// percentage correct.
#[derive(Debug, Clone)]
pub struct Checkout {
    shipping_fee: Money,
    codes: Vec<DiscountCode>,
    applied: Option<DiscountCode>,
    orders_placed: u64,
}

impl Checkout {
    /// Create a checkout with a shipping fee and discount table.
    pub fn new(shipping_fee: Money, codes: Vec<DiscountCode>) -> Self {
        Self {
            shipping_fee: shipping_fee.non_negative(),
            codes,
            applied: None,
            orders_placed: 0,
        }
    }

    /// Create a checkout from store settings.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.shipping_fee, config.discount_codes.clone())
    }

    /// Flat shipping fee.
    pub fn shipping_fee(&self) -> Money {
        self.shipping_fee
    }

    /// Apply a discount code.
    ///
    /// Unrecognized codes are rejected and leave any previously applied
    /// code in place.
    pub fn apply_discount_code(
        &mut self,
        input: &str,
        state: &CartState,
    ) -> Result<AppliedDiscount, CommerceError> {
        let code = match find_code(&self.codes, input) {
            Some(code) => code.clone(),
            None => {
                warn!(code = input, "rejected discount code");
                return Err(CommerceError::InvalidDiscountCode(input.trim().to_string()));
            }
        };

        let applied = AppliedDiscount::from_code(&code, state.subtotal());
        info!(code = %code.code, percent_off = code.percent_off, "discount code applied");
        self.applied = Some(code);
        Ok(applied)
    }

    /// Remove the applied discount code. Returns false if none was applied.
    pub fn remove_discount(&mut self) -> bool {
        self.applied.take().is_some()
    }

    /// The applied discount, priced against a cart snapshot.
    pub fn applied_discount(&self, state: &CartState) -> Option<AppliedDiscount> {
        self.applied
            .as_ref()
            .map(|code| AppliedDiscount::from_code(code, state.subtotal()))
    }

    /// Compute checkout totals for a cart snapshot.
    pub fn summary(&self, state: &CartState) -> CheckoutSummary {
        let subtotal = state.subtotal();
        let discount = self
            .applied
            .as_ref()
            .map(|code| code.amount_for(subtotal))
            .unwrap_or_default();

        CheckoutSummary {
            item_count: state.item_count(),
            subtotal,
            shipping: self.shipping_fee,
            discount,
            total: (subtotal + self.shipping_fee - discount).non_negative(),
            discount_code: self.applied.as_ref().map(|c| c.code.clone()),
        }
    }

    /// Place an order for everything in the cart.
    ///
    /// On success the cart is cleared and the applied discount is reset, so
    /// the next order starts fresh.
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        user_id: Option<UserId>,
        contact: ContactInfo,
        address: Address,
    ) -> Result<Order, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        contact.validate()?;
        address.validate()?;

        let state = cart.state();
        let summary = self.summary(state);
        let discount = self.applied_discount(state);

        self.orders_placed += 1;
        let order = Order::from_parts(
            format!("#ORD-{:04}", self.orders_placed),
            user_id,
            contact,
            address,
            state.items(),
            discount,
            &summary,
        );

        info!(
            order_number = %order.order_number,
            items = order.item_count(),
            total = %order.total,
            "order placed"
        );

        cart.clear();
        self.applied = None;
        Ok(order)
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;

    fn cart_with(total_major: i64) -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(LineItem::new(1u64, "A", Money::from_major(total_major), "").unwrap());
        cart
    }

    fn contact() -> ContactInfo {
        ContactInfo::new("shopper@example.com").with_phone("+1 (555) 000-0000")
    }

    fn address() -> Address {
        Address::new("John", "Doe", "123 Main Street", "New York", "10001", "United States")
    }

    #[test]
    fn test_summary_without_discount() {
        let cart = cart_with(100);
        let summary = Checkout::default().summary(cart.state());

        assert_eq!(summary.subtotal, Money::from_major(100));
        assert_eq!(summary.shipping, Money::from_major(250));
        assert_eq!(summary.discount, Money::zero());
        assert_eq!(summary.total, Money::from_major(350));
        assert!(!summary.has_discount());
    }

    #[test]
    fn test_apply_save10() {
        let cart = cart_with(100);
        let mut checkout = Checkout::default();

        let applied = checkout.apply_discount_code("save10", cart.state()).unwrap();
        assert_eq!(applied.amount, Money::from_major(10));

        let summary = checkout.summary(cart.state());
        assert_eq!(summary.total, Money::from_major(340));
        assert_eq!(summary.discount_code.as_deref(), Some("SAVE10"));
    }

    #[test]
    fn test_invalid_code_keeps_previous() {
        let cart = cart_with(100);
        let mut checkout = Checkout::default();
        checkout.apply_discount_code("SAVE10", cart.state()).unwrap();

        let err = checkout.apply_discount_code("FREESTUFF", cart.state()).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidDiscountCode(ref c) if c == "FREESTUFF"));
        assert_eq!(checkout.summary(cart.state()).discount, Money::from_major(10));
    }

    #[test]
    fn test_discount_follows_cart_changes() {
        let mut cart = cart_with(100);
        let mut checkout = Checkout::default();
        checkout.apply_discount_code("SAVE10", cart.state()).unwrap();

        cart.update_quantity(&1u64.into(), 3);
        assert_eq!(checkout.summary(cart.state()).discount, Money::from_major(30));
    }

    #[test]
    fn test_remove_discount() {
        let cart = cart_with(100);
        let mut checkout = Checkout::default();
        assert!(!checkout.remove_discount());
        checkout.apply_discount_code("SAVE10", cart.state()).unwrap();
        assert!(checkout.remove_discount());
        assert_eq!(checkout.summary(cart.state()).discount, Money::zero());
    }

    #[test]
    fn test_total_never_negative() {
        let cart = cart_with(100);
        let mut checkout = Checkout::new(Money::zero(), vec![DiscountCode::new("ALL", 100)]);
        checkout.apply_discount_code("all", cart.state()).unwrap();
        assert_eq!(checkout.summary(cart.state()).total, Money::zero());
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut cart = cart_with(100);
        let mut checkout = Checkout::default();
        checkout.apply_discount_code("SAVE10", cart.state()).unwrap();

        let order = checkout
            .place_order(&mut cart, None, contact(), address())
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.order_number, "#ORD-0001");
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.subtotal, Money::from_major(100));
        assert_eq!(order.discount_total, Money::from_major(10));
        assert_eq!(order.total, Money::from_major(340));
        assert!(checkout.summary(cart.state()).discount_code.is_none());
    }

    #[test]
    fn test_place_order_empty_cart() {
        let mut cart = CartStore::new();
        let err = Checkout::default()
            .place_order(&mut cart, None, contact(), address())
            .unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_place_order_invalid_details_keeps_cart() {
        let mut cart = cart_with(100);
        let mut checkout = Checkout::default();

        let err = checkout
            .place_order(&mut cart, None, ContactInfo::new("nope"), address())
            .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));

        let err = checkout
            .place_order(&mut cart, None, contact(), Address::default())
            .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_order_numbers_increment() {
        let mut checkout = Checkout::default();
        let mut cart = cart_with(1);
        checkout.place_order(&mut cart, None, contact(), address()).unwrap();
        let mut cart = cart_with(2);
        let second = checkout.place_order(&mut cart, None, contact(), address()).unwrap();
        assert_eq!(second.order_number, "#ORD-0002");
    }
}
