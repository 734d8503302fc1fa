//! One shopper's storefront session.

use accent_auth::{AuthSession, DemoIdentityProvider, User};
use accent_commerce::prelude::*;
use anyhow::{Context as _, Result};
use tracing::info;

use crate::config;

/// Everything a browsing session touches: the catalog, the cart, checkout
/// state and who is logged in.
///
/// The cart lives only as long as the session. [`Storefront::close`] ends it
/// by emptying the cart and logging out.
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    cart: CartStore,
    checkout: Checkout,
    auth: AuthSession<DemoIdentityProvider>,
}

impl Storefront {
    /// Open a session, loading the catalog named by the config.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let catalog = config::load_catalog(&config)?;
        Self::with_catalog(config, catalog)
    }

    /// Open a session over an already loaded catalog.
    pub fn with_catalog(config: StoreConfig, catalog: Catalog) -> Result<Self> {
        config.validate().context("Invalid store config")?;

        info!(store = %config.store_name, products = catalog.len(), "storefront opened");
        Ok(Self {
            cart: CartStore::with_max_quantity(config.max_quantity_per_item),
            checkout: Checkout::from_config(&config),
            auth: AuthSession::from_config(&config.auth),
            catalog,
            config,
        })
    }

    /// End the session: empty the cart, drop any discount and log out.
    pub fn close(&mut self) {
        self.cart.clear();
        self.checkout.remove_discount();
        self.auth.logout();
        info!("storefront closed");
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn auth(&self) -> &AuthSession<DemoIdentityProvider> {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthSession<DemoIdentityProvider> {
        &mut self.auth
    }

    /// Add a catalog product to the cart at its effective price.
    pub fn add_product(&mut self, id: &ProductId, quantity: i64) -> Result<&CartState> {
        let product = self.catalog.require(id)?;
        let item = product
            .to_line_item_with_placeholder(&self.config.placeholder_image)?
            .with_quantity(quantity)?;
        Ok(self.cart.add_item(item))
    }

    /// Apply a discount code to the current cart.
    pub fn apply_discount(&mut self, code: &str) -> Result<AppliedDiscount> {
        Ok(self.checkout.apply_discount_code(code, self.cart.state())?)
    }

    /// Drop the applied discount code.
    pub fn remove_discount(&mut self) -> bool {
        self.checkout.remove_discount()
    }

    /// Checkout totals for the current cart.
    pub fn summary(&self) -> CheckoutSummary {
        self.checkout.summary(self.cart.state())
    }

    /// Place an order for the current cart as the logged-in user, if any.
    pub fn place_order(&mut self, contact: ContactInfo, address: Address) -> Result<Order> {
        let user_id = self.auth.user().map(|u| u.id.clone());
        Ok(self
            .checkout
            .place_order(&mut self.cart, user_id, contact, address)?)
    }

    /// The admin dashboard gate.
    pub fn dashboard(&self) -> Result<&User> {
        Ok(self.auth.require_admin()?)
    }

    /// Format an amount with the store's currency symbol.
    pub fn money(&self, amount: Money) -> String {
        self.config.format_money(amount)
    }
}
