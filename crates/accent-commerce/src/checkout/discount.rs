//! Discount codes.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A code that takes a fixed percentage off the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountCode {
    /// Code as typed by the shopper (matched case-insensitively).
    pub code: String,
    /// Percentage off the subtotal (1-100).
    pub percent_off: u32,
}

impl DiscountCode {
    /// Create a new discount code.
    pub fn new(code: impl Into<String>, percent_off: u32) -> Self {
        Self {
            code: code.into(),
            percent_off,
        }
    }

    /// Check the code is usable.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.code.trim().is_empty() {
            return Err(CommerceError::Validation(
                "discount code must not be blank".to_string(),
            ));
        }
        if self.percent_off == 0 || self.percent_off > 100 {
            return Err(CommerceError::InvalidDiscount(self.percent_off));
        }
        Ok(())
    }

    /// Exact, case-insensitive match after trimming the input.
    pub fn matches(&self, input: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(input.trim())
    }

    /// Discount amount for a subtotal.
    pub fn amount_for(&self, subtotal: Money) -> Money {
        subtotal.non_negative().percentage(self.percent_off)
    }
}

/// A discount that has been applied at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    /// The canonical code.
    pub code: String,
    /// Percentage off.
    pub percent_off: u32,
    /// Amount discounted from the subtotal it was computed against.
    pub amount: Money,
}

impl AppliedDiscount {
    /// Compute the applied discount against a subtotal.
    pub fn from_code(code: &DiscountCode, subtotal: Money) -> Self {
        Self {
            code: code.code.clone(),
            percent_off: code.percent_off,
            amount: code.amount_for(subtotal),
        }
    }

    /// Human-readable description, e.g. "10% off (SAVE10)".
    pub fn description(&self) -> String {
        format!("{}% off ({})", self.percent_off, self.code)
    }
}

/// Look up a code in a table.
pub fn find_code<'a>(codes: &'a [DiscountCode], input: &str) -> Option<&'a DiscountCode> {
    codes.iter().find(|c| c.matches(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let code = DiscountCode::new("SAVE10", 10);
        assert!(code.matches("SAVE10"));
        assert!(code.matches("save10"));
        assert!(code.matches("  Save10 "));
        assert!(!code.matches("SAVE1"));
        assert!(!code.matches("SAVE100"));
        assert!(!code.matches(""));
    }

    #[test]
    fn test_amount() {
        let code = DiscountCode::new("SAVE10", 10);
        assert_eq!(code.amount_for(Money::from_major(250)), Money::from_major(25));
        assert_eq!(code.amount_for(Money::zero()), Money::zero());
    }

    #[test]
    fn test_validate() {
        assert!(DiscountCode::new("OK", 100).validate().is_ok());
        assert!(DiscountCode::new("ZERO", 0).validate().is_err());
        assert!(DiscountCode::new(" ", 5).validate().is_err());
    }

    #[test]
    fn test_find_code() {
        let codes = vec![DiscountCode::new("SAVE10", 10), DiscountCode::new("HALF", 50)];
        assert_eq!(find_code(&codes, "half").unwrap().percent_off, 50);
        assert!(find_code(&codes, "FREE").is_none());
    }

    #[test]
    fn test_description() {
        let code = DiscountCode::new("SAVE10", 10);
        let applied = AppliedDiscount::from_code(&code, Money::from_major(10));
        assert_eq!(applied.description(), "10% off (SAVE10)");
        assert_eq!(applied.amount, Money::from_major(1));
    }
}
