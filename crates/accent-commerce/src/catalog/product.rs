//! Product type.

use crate::cart::LineItem;
use crate::catalog::Category;
use crate::config::PLACEHOLDER_IMAGE;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List price.
    pub price: Money,
    /// Percentage off the list price (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Category.
    pub category: Category,
    /// Average rating (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Image URLs, first one is the thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Result<Self, CommerceError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            discount: None,
            category,
            rating: None,
            images: Vec::new(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Set a percentage discount.
    pub fn with_discount(mut self, percent: u32) -> Result<Self, CommerceError> {
        if percent > 100 {
            return Err(CommerceError::InvalidDiscount(percent));
        }
        self.discount = Some(percent).filter(|p| *p > 0);
        Ok(self)
    }

    /// Set the average rating.
    pub fn with_rating(mut self, rating: f32) -> Result<Self, CommerceError> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(CommerceError::InvalidRating(rating));
        }
        self.rating = Some(rating);
        Ok(self)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Check invariants. Used after deserializing untrusted catalog data.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidPrice(self.price.amount_minor()));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {} has a blank name",
                self.id
            )));
        }
        if let Some(percent) = self.discount {
            if percent > 100 {
                return Err(CommerceError::InvalidDiscount(percent));
            }
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(CommerceError::InvalidRating(rating));
            }
        }
        Ok(())
    }

    /// Check if a discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount.map(|p| p > 0).unwrap_or(false)
    }

    /// Price after the product's own discount.
    pub fn effective_price(&self) -> Money {
        match self.discount {
            Some(percent) => self.price - self.price.percentage(percent),
            None => self.price,
        }
    }

    /// Amount saved per unit by the discount.
    pub fn savings(&self) -> Money {
        self.price - self.effective_price()
    }

    /// Thumbnail image, if any.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Build a cart line at the effective price.
    pub fn to_line_item(&self) -> Result<LineItem, CommerceError> {
        self.to_line_item_with_placeholder(PLACEHOLDER_IMAGE)
    }

    /// Build a cart line, using `placeholder` when the product has no image.
    pub fn to_line_item_with_placeholder(
        &self,
        placeholder: &str,
    ) -> Result<LineItem, CommerceError> {
        LineItem::new(
            self.id.clone(),
            self.name.clone(),
            self.effective_price(),
            self.thumbnail().unwrap_or(placeholder),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(5u64, "Ceramic Table Lamp", Money::from_major(89), Category::HomeLiving)
            .unwrap()
    }

    #[test]
    fn test_effective_price_without_discount() {
        assert_eq!(lamp().effective_price(), Money::from_major(89));
        assert!(!lamp().has_discount());
    }

    #[test]
    fn test_effective_price_with_discount() {
        let product = lamp().with_discount(20).unwrap();
        // 89.00 - 17.80
        assert_eq!(product.effective_price(), Money::from_minor(7120));
        assert_eq!(product.savings(), Money::from_minor(1780));
    }

    #[test]
    fn test_zero_discount_is_none() {
        assert_eq!(lamp().with_discount(0).unwrap().discount, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(lamp().with_discount(101).is_err());
        assert!(lamp().with_rating(5.5).is_err());
        assert!(Product::new(1u64, "X", Money::from_minor(-5), Category::Fashion).is_err());
        assert!(Product::new(1u64, "", Money::from_major(5), Category::Fashion).is_err());
    }

    #[test]
    fn test_line_item_uses_effective_price_and_thumbnail() {
        let product = lamp()
            .with_discount(50)
            .unwrap()
            .with_image("a.jpg")
            .with_image("b.jpg");
        let item = product.to_line_item().unwrap();

        assert_eq!(item.price, Money::from_minor(4450));
        assert_eq!(item.image, "a.jpg");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_item_placeholder() {
        assert_eq!(lamp().to_line_item().unwrap().image, PLACEHOLDER_IMAGE);
        assert_eq!(
            lamp().to_line_item_with_placeholder("none.png").unwrap().image,
            "none.png"
        );
    }
}
