//! Line item type.

use crate::cart::MAX_QUANTITY_PER_ITEM;
use crate::config::PLACEHOLDER_IMAGE;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Constructed through [`LineItem::new`], which rejects negative prices and
/// blank names; the quantity always starts at 1. Deserialization runs the
/// same checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    pub(crate) id: ProductId,
    pub(crate) name: String,
    pub(crate) price: Money,
    pub(crate) image: String,
    pub(crate) quantity: i64,
}

/// Unchecked wire form of [`LineItem`].
#[derive(Deserialize)]
struct RawLineItem {
    id: ProductId,
    name: String,
    price: Money,
    #[serde(default)]
    image: String,
    #[serde(default = "default_quantity")]
    quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = CommerceError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        LineItem::new(raw.id, raw.name, raw.price, raw.image)?.with_quantity(raw.quantity)
    }
}

impl LineItem {
    /// Create a new line item with quantity 1.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.amount_minor()));
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommerceError::Validation(
                "line item name must not be blank".to_string(),
            ));
        }

        let mut image = image.into();
        if image.trim().is_empty() {
            image = PLACEHOLDER_IMAGE.to_string();
        }

        Ok(Self {
            id: id.into(),
            name,
            price,
            image,
            quantity: 1,
        })
    }

    /// Set the quantity to add in one call.
    ///
    /// Quantities above [`MAX_QUANTITY_PER_ITEM`] are clamped.
    pub fn with_quantity(mut self, quantity: i64) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        self.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
        Ok(self)
    }

    /// Product identifier.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product name (denormalized for display).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time the item was added.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_item() {
        let item = LineItem::new(1u64, "Wireless Headphones", Money::from_major(299), "img.jpg")
            .unwrap();
        assert_eq!(item.id, ProductId::new("1"));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), Money::from_major(299));
    }

    #[test]
    fn test_free_item_allowed() {
        assert!(LineItem::new("gift", "Gift Card Sleeve", Money::zero(), "").is_ok());
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = LineItem::new("p", "Thing", Money::from_minor(-1), "").unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(-1)));
    }

    #[test]
    fn test_rejects_blank_name() {
        assert!(LineItem::new("p", "   ", Money::from_major(1), "").is_err());
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        let item = LineItem::new("p", "Thing", Money::from_major(1), " ").unwrap();
        assert_eq!(item.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_with_quantity() {
        let item = LineItem::new("p", "Thing", Money::from_major(2), "")
            .unwrap()
            .with_quantity(3)
            .unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total(), Money::from_major(6));
    }

    #[test]
    fn test_with_quantity_rejects_zero() {
        let item = LineItem::new("p", "Thing", Money::from_major(2), "").unwrap();
        assert!(matches!(
            item.with_quantity(0),
            Err(CommerceError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_deserialize_rejects_negative_price() {
        let json = r#"{"id":"x","name":"Thing","price":-5000,"image":"","quantity":1}"#;
        let err = serde_json::from_str::<LineItem>(json).unwrap_err();
        assert!(err.to_string().contains("-5000"));
    }

    #[test]
    fn test_deserialize_rejects_blank_name_and_zero_quantity() {
        assert!(serde_json::from_str::<LineItem>(r#"{"id":"x","name":" ","price":100}"#).is_err());
        assert!(serde_json::from_str::<LineItem>(
            r#"{"id":"x","name":"Thing","price":100,"quantity":0}"#
        )
        .is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let item: LineItem =
            serde_json::from_str(r#"{"id":"x","name":"Thing","price":250}"#).unwrap();
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.image(), PLACEHOLDER_IMAGE);
        assert_eq!(item.price(), Money::from_minor(250));
    }

    #[test]
    fn test_with_quantity_clamps() {
        let item = LineItem::new("p", "Thing", Money::from_major(2), "")
            .unwrap()
            .with_quantity(MAX_QUANTITY_PER_ITEM + 50)
            .unwrap();
        assert_eq!(item.quantity, MAX_QUANTITY_PER_ITEM);
    }
}
