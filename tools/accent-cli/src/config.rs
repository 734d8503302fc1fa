//! Config file loading.

use std::path::Path;

use accent_commerce::catalog::Catalog;
use accent_commerce::StoreConfig;
use anyhow::{Context, Result};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["accent.toml", ".accent.toml", "accent.json"];

/// Load store config from a TOML or JSON file.
pub fn load(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        StoreConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        StoreConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Save store config to a file.
pub fn save(config: &StoreConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        config.to_toml_string()?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// Load the catalog named by the config, or the demo catalog.
pub fn load_catalog(config: &StoreConfig) -> Result<Catalog> {
    let Some(ref catalog_path) = config.catalog_path else {
        return Ok(Catalog::demo());
    };

    let path = Path::new(catalog_path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    Catalog::from_json_str(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Generate a commented default accent.toml.
pub fn generate_default_config() -> String {
    let defaults = StoreConfig::default();
    format!(
        r#"# Accent storefront configuration

store_name = "{store_name}"
currency_symbol = "{currency_symbol}"
# Flat shipping fee in minor units
shipping_fee = {shipping_fee}
max_quantity_per_item = {max_quantity}
placeholder_image = "{placeholder}"
# catalog_path = "catalog.json"

[[discount_codes]]
code = "SAVE10"
percent_off = 10

[auth]
latency_ms = {latency_ms}
timeout_ms = {timeout_ms}
admin_emails = ["admin@accenthubs.com"]
accept_unknown = true
"#,
        store_name = defaults.store_name,
        currency_symbol = defaults.currency_symbol,
        shipping_fee = defaults.shipping_fee.amount_minor(),
        max_quantity = defaults.max_quantity_per_item,
        placeholder = defaults.placeholder_image,
        latency_ms = defaults.auth.latency_ms,
        timeout_ms = defaults.auth.timeout_ms,
    )
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed = StoreConfig::from_toml_str(&generate_default_config()).unwrap();
        let defaults = StoreConfig::default();
        assert_eq!(parsed.store_name, defaults.store_name);
        assert_eq!(parsed.shipping_fee, defaults.shipping_fee);
        assert_eq!(parsed.discount_codes, defaults.discount_codes);
        assert_eq!(parsed.auth.admin_emails, defaults.auth.admin_emails);
        assert!(parsed.catalog_path.is_none());
    }

    #[test]
    fn test_demo_catalog_without_path() {
        let catalog = load_catalog(&StoreConfig::default()).unwrap();
        assert_eq!(catalog.len(), Catalog::demo().len());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = StoreConfig {
            catalog_path: Some("/nonexistent/catalog.json".to_string()),
            ..StoreConfig::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog"));
    }
}
