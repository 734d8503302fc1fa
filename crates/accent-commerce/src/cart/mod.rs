//! Shopping cart module.
//!
//! Contains the session cart store, its line items and pricing breakdown.

mod line_item;
mod pricing;
mod store;

pub use line_item::LineItem;
pub use pricing::{CartPricing, LineItemPricing};
pub use store::{CartState, CartStore, SubscriptionId, MAX_QUANTITY_PER_ITEM};
