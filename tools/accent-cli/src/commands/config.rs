//! Configuration management commands.

use std::fs;

use accent_commerce::StoreConfig;
use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{self, generate_default_config};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("store_name", &config.store_name);
    ctx.output.kv("currency_symbol", &format!("{:?}", config.currency_symbol));
    ctx.output.kv("shipping_fee", &config.format_money(config.shipping_fee));
    ctx.output.kv("max_quantity_per_item", &config.max_quantity_per_item.to_string());
    ctx.output.kv("placeholder_image", &config.placeholder_image);
    if let Some(ref path) = config.catalog_path {
        ctx.output.kv("catalog_path", path);
    }

    ctx.output.info("");
    ctx.output.info("[discount_codes]");
    for code in &config.discount_codes {
        ctx.output.list_item(&format!("{} ({}% off)", code.code, code.percent_off));
    }

    ctx.output.info("");
    ctx.output.info("[auth]");
    ctx.output.kv("latency_ms", &config.auth.latency_ms.to_string());
    ctx.output.kv("timeout_ms", &config.auth.timeout_ms.to_string());
    ctx.output.kv("admin_emails", &config.auth.admin_emails.join(", "));
    ctx.output.kv("accept_unknown", &config.auth.accept_unknown.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = match ctx.config_path {
        Some(ref path) if force => path.clone(),
        _ => ctx.cwd.join(config::CONFIG_FILE_NAMES[0]),
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if config_path.extension().map_or(false, |e| e == "json") {
        config::save(&StoreConfig::default(), &config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
