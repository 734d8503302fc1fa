//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the storefront boundaries.
///
/// The cart store itself never fails; these errors come from validated
/// constructors, catalog lookups, discount codes and checkout.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Price is negative.
    #[error("Invalid price: {0} (must not be negative)")]
    InvalidPrice(i64),

    /// Quantity is not positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Percentage discount outside 0..=100.
    #[error("Invalid discount: {0}% (must be between 0 and 100)")]
    InvalidDiscount(u32),

    /// Rating outside 0..=5.
    #[error("Invalid rating: {0} (must be between 0 and 5)")]
    InvalidRating(f32),

    /// Discount code not recognized.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommerceError {
    /// Check if this error was caused by shopper input (as opposed to
    /// configuration or data files).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CommerceError::ProductNotFound(_)
                | CommerceError::InvalidQuantity(_)
                | CommerceError::InvalidDiscountCode(_)
                | CommerceError::EmptyCart
                | CommerceError::Validation(_)
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
