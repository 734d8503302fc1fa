//! Catalog listing.

use accent_commerce::prelude::*;
use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;
use crate::storefront::Storefront;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let filter: CategoryFilter = args.category.parse()?;
    let store = ctx.open_storefront()?;
    let products = store.catalog().search(&args.search, filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("{} catalog", store.config().store_name));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    let widths = [4, 28, 14, 12, 8];
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "OFF"], &widths);
    for product in &products {
        let off = product
            .discount
            .map(|d| format!("{}%", d))
            .unwrap_or_default();
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                product.category.display_name(),
                store.money(product.effective_price()).as_str(),
                off.as_str(),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    print_category_counts(&store, ctx);

    Ok(())
}

fn print_category_counts(store: &Storefront, ctx: &Context) {
    for (category, count) in store.catalog().category_counts() {
        ctx.output.kv(category.display_name(), &format!("{} products", count));
    }
}
