//! Store-wide configuration.

use serde::{Deserialize, Serialize};

use crate::cart::MAX_QUANTITY_PER_ITEM;
use crate::checkout::DiscountCode;
use crate::error::CommerceError;
use crate::money::Money;

/// Image used when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400";

/// Settings shared by the cart, checkout and auth boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store display name.
    pub store_name: String,

    /// Prefix used when rendering prices (e.g., "Rs ").
    pub currency_symbol: String,

    /// Flat shipping fee added at checkout.
    pub shipping_fee: Money,

    /// Upper bound for a single line's quantity.
    pub max_quantity_per_item: i64,

    /// Image reference for products without images.
    pub placeholder_image: String,

    /// Optional JSON catalog to load instead of the demo catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,

    /// Recognized discount codes.
    pub discount_codes: Vec<DiscountCode>,

    /// Auth boundary settings.
    pub auth: AuthConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "AccentHubs".to_string(),
            currency_symbol: "Rs ".to_string(),
            shipping_fee: Money::from_major(250),
            max_quantity_per_item: MAX_QUANTITY_PER_ITEM,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            catalog_path: None,
            discount_codes: vec![DiscountCode::new("SAVE10", 10)],
            auth: AuthConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::Serialization(e.to_string()))
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.shipping_fee.is_negative() {
            return Err(CommerceError::Config(format!(
                "shipping_fee must not be negative (got {})",
                self.shipping_fee
            )));
        }

        if self.max_quantity_per_item < 1 {
            return Err(CommerceError::Config(format!(
                "max_quantity_per_item must be at least 1 (got {})",
                self.max_quantity_per_item
            )));
        }

        for code in &self.discount_codes {
            code.validate()?;
        }

        Ok(())
    }

    /// Format an amount with the configured symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.display_with(&self.currency_symbol)
    }
}

/// Settings for the identity provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated provider latency in milliseconds.
    pub latency_ms: u64,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// E-mail addresses the provider issues the admin role to.
    pub admin_emails: Vec<String>,

    /// Accept logins for e-mails the provider has never seen.
    pub accept_unknown: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            timeout_ms: 5000,
            admin_emails: vec!["admin@accenthubs.com".to_string()],
            accept_unknown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.shipping_fee, Money::from_major(250));
        assert_eq!(config.discount_codes.len(), 1);
        assert_eq!(config.discount_codes[0].code, "SAVE10");
        assert_eq!(config.format_money(Money::from_major(5)), "Rs 5.00");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            currency_symbol = "$"
            shipping_fee = 500

            [auth]
            latency_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.shipping_fee, Money::from_minor(500));
        assert_eq!(config.auth.latency_ms, 0);
        assert_eq!(config.auth.timeout_ms, 5000);
        assert_eq!(config.max_quantity_per_item, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_discount_table_from_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
            [[discount_codes]]
            code = "WELCOME"
            percent_off = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.discount_codes, vec![DiscountCode::new("WELCOME", 15)]);
    }

    #[test]
    fn test_rejects_negative_shipping() {
        let err = StoreConfig::from_toml_str("shipping_fee = -1").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_discount() {
        let err = StoreConfig::from_json_str(
            r#"{"discount_codes": [{"code": "HUGE", "percent_off": 150}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidDiscount(150)));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = StoreConfig::default().to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&rendered).unwrap(), StoreConfig::default());
    }
}
