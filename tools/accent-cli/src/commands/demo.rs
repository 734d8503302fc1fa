//! Built-in shopping walkthrough.

use anyhow::Result;

use super::run::report;
use crate::context::Context;
use crate::script;

/// Browse, fill the cart, edit it, apply a code, log in and check out.
const DEMO_SCRIPT: &str = r#"
add 1
add 1
add 3
qty 1 1
remove 3
cart
discount WELCOME50
discount save10
login admin@accenthubs.com demo-password
dashboard
add 4 2
cart
checkout admin@accenthubs.com Asha Rao "12 MG Road" Pune 411001 India
cart
logout
"#;

/// Run the demo command.
pub async fn run(ctx: &Context) -> Result<()> {
    let lines = script::parse(DEMO_SCRIPT)?;
    let mut store = ctx.open_storefront()?;

    let output = ctx.output;
    let subscription = store.cart_mut().subscribe(move |state| {
        output.debug(&format!(
            "cart revision {}: {} lines",
            state.revision(),
            state.unique_item_count()
        ));
    });

    ctx.output.header(&format!("{} demo", store.config().store_name));

    for (i, line) in lines.iter().enumerate() {
        ctx.output.step(i + 1, lines.len(), &line.text);

        match script::execute(&mut store, &line.command).await {
            Ok(outcome) => report(&store, &outcome, &ctx.output),
            Err(e) if script::is_recoverable(&e) => {
                ctx.output.warn(&format!("{:#}", e));
            }
            Err(e) => {
                return Err(e.context(format!("demo step {} failed", i + 1)));
            }
        }
    }

    store.cart_mut().unsubscribe(subscription);
    store.close();
    ctx.output.success("Demo complete");

    Ok(())
}
