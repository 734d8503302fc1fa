//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A storefront category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home & Living", alias = "home-living")]
    HomeLiving,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Fashion, Category::HomeLiving];

    /// Display name (e.g., "Home & Living").
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeLiving => "Home & Living",
        }
    }

    /// URL-friendly slug.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::HomeLiving => "home-living",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.display_name().eq_ignore_ascii_case(needle)
                    || c.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CommerceError::Validation(format!("unknown category: {}", s)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Category selection on the browsing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    /// Check if a category passes the filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(c: Category) -> Self {
        CategoryFilter::Only(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names_and_slugs() {
        assert_eq!("Home & Living".parse::<Category>().unwrap(), Category::HomeLiving);
        assert_eq!("home-living".parse::<Category>().unwrap(), Category::HomeLiving);
        assert_eq!(" FASHION ".parse::<Category>().unwrap(), Category::Fashion);
        assert!("Toys".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "electronics".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Electronics)
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Fashion));
        assert!(!CategoryFilter::from(Category::Electronics).matches(Category::Fashion));
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Category::HomeLiving).unwrap();
        assert_eq!(json, "\"Home & Living\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::HomeLiving);
    }
}
