//! Storefront domain types and logic for Accent.
//!
//! This crate holds everything the storefront pages read from or write to:
//!
//! - **Catalog**: Products, categories, search by name and category
//! - **Cart**: The session cart store with line items and derived totals
//! - **Checkout**: Shipping fee, discount codes, contact details, orders
//! - **Config**: Store-wide settings loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use accent_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let headphones = catalog.get(&ProductId::from(1u64)).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add_item(headphones.to_line_item().unwrap());
//! cart.add_item(headphones.to_line_item().unwrap());
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal(), Money::from_major(598));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{
        CartPricing, CartState, CartStore, LineItem, LineItemPricing, SubscriptionId,
        MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        Address, AppliedDiscount, Checkout, CheckoutSummary, ContactInfo, DiscountCode, Order,
        OrderLine, OrderStatus,
    };
}
