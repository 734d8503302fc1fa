//! Shopping script replay.

use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::RunArgs;
use crate::context::Context;
use crate::output::{status_badge, Output};
use crate::script::{self, Line, Outcome};
use crate::storefront::Storefront;

/// One replayed line, for JSON output.
#[derive(Serialize)]
struct Record<'a> {
    line: usize,
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the run command.
pub async fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let lines = script::parse(&source)
        .with_context(|| format!("Failed to parse script: {}", path.display()))?;

    let mut store = ctx.open_storefront()?;
    let result = replay(&mut store, &lines, args.strict, ctx).await;
    if let Some(user) = store.auth().user() {
        ctx.output.debug(&format!("Closing session for {}", user.email));
    }
    store.close();

    let failed = result?;
    if failed > 0 {
        ctx.output.warn(&format!("{} of {} commands failed", failed, lines.len()));
    } else {
        ctx.output.success(&format!("Replayed {} commands", lines.len()));
    }

    Ok(())
}

/// Replay parsed lines. Returns how many commands failed recoverably.
async fn replay(
    store: &mut Storefront,
    lines: &[Line],
    strict: bool,
    ctx: &Context,
) -> Result<usize> {
    let mut records = Vec::with_capacity(lines.len());
    let mut failed = 0;

    for line in lines {
        ctx.output.debug(&format!("{}: {}", line.number, line.text));

        match script::execute(store, &line.command).await {
            Ok(outcome) => {
                report(store, &outcome, &ctx.output);
                records.push(Record {
                    line: line.number,
                    command: &line.text,
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(e) if !strict && script::is_recoverable(&e) => {
                ctx.output.warn(&format!("line {}: {:#}", line.number, e));
                failed += 1;
                records.push(Record {
                    line: line.number,
                    command: &line.text,
                    outcome: None,
                    error: Some(format!("{:#}", e)),
                });
            }
            Err(e) => {
                return Err(e.context(format!("line {}: {}", line.number, line.text)));
            }
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&records);
    }

    Ok(failed)
}

/// Print what a command did.
pub fn report(store: &Storefront, outcome: &Outcome, output: &Output) {
    match outcome {
        Outcome::CartChanged {
            item_count,
            subtotal,
            ..
        } => output.success(&format!(
            "Cart: {} items, subtotal {}",
            item_count,
            store.money(*subtotal)
        )),
        Outcome::Cart { lines, summary } => {
            output.header("Cart");
            if lines.is_empty() {
                output.info("Your cart is empty.");
                return;
            }
            let widths = [4, 28, 5, 12];
            for line in lines {
                output.table_row(
                    &[
                        line.product_id.as_str(),
                        line.name.as_str(),
                        format!("x{}", line.quantity).as_str(),
                        store.money(line.total).as_str(),
                    ],
                    &widths,
                );
            }
            output.kv("subtotal", &store.money(summary.subtotal));
            output.kv("shipping", &store.money(summary.shipping));
            if let Some(ref code) = summary.discount_code {
                output.kv(
                    &format!("discount ({})", code),
                    &format!("-{}", store.money(summary.discount)),
                );
            }
            output.kv("total", &store.money(summary.total));
        }
        Outcome::DiscountApplied(discount) => output.success(&format!(
            "Applied {}: -{}",
            discount.description(),
            store.money(discount.amount)
        )),
        Outcome::DiscountRemoved { removed: true } => output.info("Discount removed"),
        Outcome::DiscountRemoved { removed: false } => output.info("No discount to remove"),
        Outcome::OrderPlaced(order) => {
            output.success(&format!(
                "Order {} placed: {} items, total {}",
                order.order_number,
                order.item_count(),
                store.money(order.total)
            ));
            output.kv("status", &status_badge(order.status));
            output.kv("ship to", &order.shipping_address.one_line());
            output.kv("placed at", &order.placed_at.to_rfc3339());
        }
        Outcome::LoggedIn { user, landing } => output.success(&format!(
            "Logged in as {} ({}), landing on {}",
            user.name,
            user.role.as_str(),
            landing.path()
        )),
        Outcome::LoggedOut { user: Some(user) } => {
            output.info(&format!("Logged out {}", user.email))
        }
        Outcome::LoggedOut { user: None } => output.info("Nobody was logged in"),
        Outcome::Dashboard { user } => {
            output.success(&format!("Admin dashboard opened for {}", user.email))
        }
    }
}
