//! Checkout module.
//!
//! Contains discount codes, contact/address details, checkout totals and
//! orders.

mod address;
mod discount;
mod flow;
mod order;

pub use address::{Address, ContactInfo};
pub use discount::{find_code, AppliedDiscount, DiscountCode};
pub use flow::{Checkout, CheckoutSummary};
pub use order::{Order, OrderLine, OrderStatus};
