//! Product details.

use accent_commerce::prelude::*;
use anyhow::Result;

use super::ProductArgs;
use crate::context::Context;
use crate::output::format_rating;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_storefront()?;
    let product = store.catalog().require(&ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("category", product.category.display_name());

    if product.has_discount() {
        ctx.output.kv(
            "price",
            &format!(
                "{} (was {}, save {})",
                store.money(product.effective_price()),
                store.money(product.price),
                store.money(product.savings()),
            ),
        );
    } else {
        ctx.output.kv("price", &store.money(product.price));
    }

    if let Some(rating) = product.rating {
        ctx.output.kv("rating", &format_rating(rating));
    }
    ctx.output.kv(
        "image",
        product
            .thumbnail()
            .unwrap_or(store.config().placeholder_image.as_str()),
    );
    if let Some(ref description) = product.description {
        ctx.output.info("");
        ctx.output.info(description);
    }

    Ok(())
}
