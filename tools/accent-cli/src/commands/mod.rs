//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod product;
pub mod run;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only products whose name contains this text.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category name or slug, or "all".
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Path to the shopping script.
    pub script: String,

    /// Stop at the first failed command.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
