//! Product catalog module.
//!
//! The catalog is an in-memory, ordered collection of products. It is
//! seeded from demo data or loaded from a JSON array of products.

mod category;
mod product;

pub use category::{Category, CategoryFilter};
pub use product::Product;

use std::collections::HashSet;

use tracing::warn;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// An in-memory product catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid products and duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Render as a JSON array.
    pub fn to_json_string(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    /// Demo catalog used when no catalog file is configured.
    ///
    /// Falls back to an empty catalog, with a warning, if the seed data
    /// stops validating.
    pub fn demo() -> Self {
        Self::from_demo_seed(demo_products())
    }

    fn from_demo_seed(seed: Result<Vec<Product>, CommerceError>) -> Self {
        match seed.and_then(Self::from_products) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "demo catalog failed validation, starting empty");
                Self::default()
            }
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products whose name contains `query` (case-insensitive) and whose
    /// category passes `filter`, in catalog order.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of products per category, in display order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .collect()
    }

    /// Iterate over all products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn demo_products() -> Result<Vec<Product>, CommerceError> {
    Ok(vec![
        Product::new(
            1u64,
            "Wireless Headphones Pro",
            Money::from_major(299),
            Category::Electronics,
        )?
        .with_rating(4.9)?
        .with_description("Over-ear noise cancelling headphones with 30 hour battery life.")
        .with_image(unsplash("photo-1505740420928-5e560c06d30e")),
        Product::new(
            2u64,
            "Smart Watch Series X",
            Money::from_major(449),
            Category::Electronics,
        )?
        .with_rating(4.8)?
        .with_description("Fitness tracking, notifications and a week of standby.")
        .with_image(unsplash("photo-1523275335684-37898b6baf30")),
        Product::new(3u64, "Premium Backpack", Money::from_major(129), Category::Fashion)?
            .with_rating(4.7)?
            .with_description("Water resistant canvas backpack with a padded laptop sleeve.")
            .with_image(unsplash("photo-1553062407-98eeb64c6a62")),
        Product::new(4u64, "Designer Sunglasses", Money::from_major(199), Category::Fashion)?
            .with_rating(4.9)?
            .with_discount(15)?
            .with_description("Polarized lenses in a lightweight acetate frame.")
            .with_image(unsplash("photo-1572635196237-14b3f281503f")),
        Product::new(5u64, "Ceramic Table Lamp", Money::from_major(89), Category::HomeLiving)?
            .with_rating(4.6)?
            .with_discount(20)?
            .with_description("Hand glazed ceramic base with a linen shade."),
    ])
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=300&h=300&fit=crop", photo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 5);
        let headphones = catalog.get(&ProductId::from(1u64)).unwrap();
        assert_eq!(headphones.price, Money::from_major(299));
    }

    #[test]
    fn test_demo_seed_validates() {
        let products = demo_products().unwrap();
        let catalog = Catalog::from_products(products).unwrap();
        for id in 1u64..=5 {
            assert!(catalog.get(&ProductId::from(id)).is_some(), "missing product {}", id);
        }
    }

    #[test]
    fn test_broken_demo_seed_falls_back_to_empty() {
        let broken = Err(CommerceError::Validation("price must not be negative".into()));
        assert!(Catalog::from_demo_seed(broken).is_empty());

        let twice = demo_products().unwrap().into_iter().chain(demo_products().unwrap());
        assert!(Catalog::from_demo_seed(Ok(twice.collect())).is_empty());
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let catalog = Catalog::demo();
        let hits = catalog.search("WATCH", CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Smart Watch Series X");
    }

    #[test]
    fn test_search_by_category() {
        let catalog = Catalog::demo();
        let fashion = catalog.search("", Category::Fashion.into());
        let names: Vec<&str> = fashion.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Premium Backpack", "Designer Sunglasses"]);
    }

    #[test]
    fn test_search_combines_query_and_category() {
        let catalog = Catalog::demo();
        assert!(catalog.search("lamp", Category::Electronics.into()).is_empty());
        assert_eq!(catalog.search("lamp", Category::HomeLiving.into()).len(), 1);
    }

    #[test]
    fn test_category_counts() {
        let counts = Catalog::demo().category_counts();
        assert_eq!(
            counts,
            vec![
                (Category::Electronics, 2),
                (Category::Fashion, 2),
                (Category::HomeLiving, 1)
            ]
        );
    }

    #[test]
    fn test_require_missing() {
        let err = Catalog::demo().require(&ProductId::new("nope")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": "k1", "name": "Kettle", "price": 3500, "category": "Home & Living"},
                {"id": "t1", "name": "T-Shirt", "price": 1200, "discount": 10,
                 "category": "Fashion", "images": ["shirt.jpg"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let shirt = catalog.get(&ProductId::new("t1")).unwrap();
        assert_eq!(shirt.effective_price(), Money::from_minor(1080));
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let err = Catalog::from_json_str(
            r#"[
                {"id": "a", "name": "A", "price": 1, "category": "Fashion"},
                {"id": "a", "name": "B", "price": 2, "category": "Fashion"}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let err = Catalog::from_json_str(
            r#"[{"id": "a", "name": "A", "price": -1, "category": "Fashion"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(-1)));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::demo();
        let json = catalog.to_json_string().unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }
}
