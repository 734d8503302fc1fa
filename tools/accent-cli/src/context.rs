//! CLI execution context.

use std::path::{Path, PathBuf};

use accent_commerce::StoreConfig;
use anyhow::{Context as _, Result};

use crate::config::{self, CONFIG_FILE_NAMES};
use crate::output::Output;
use crate::storefront::Storefront;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (config::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => (config::load(&path)?, Some(path)),
                None => (StoreConfig::default(), None),
            }
        };

        match config_path {
            Some(ref path) => output.debug(&format!("Using config: {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        // Catalog paths are relative to the config file.
        if let Some(ref catalog_path) = config.catalog_path {
            let base = config_path
                .as_deref()
                .and_then(Path::parent)
                .unwrap_or(cwd.as_path());
            config.catalog_path = Some(resolve(base, catalog_path).to_string_lossy().into_owned());
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open a storefront session with the loaded config.
    pub fn open_storefront(&self) -> Result<Storefront> {
        Storefront::open(self.config.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
