//! CLI command implementations

pub mod cart;
pub mod config;
pub mod search;
pub mod site;
pub mod stages;
pub mod swipe;

use festival_cart::FileStore;
use festival_core::config::Config;
use festival_core::Catalog;
use std::path::Path;

/// Shared state for every command
pub struct Context {
    pub config: Config,
    pub json: bool,
}

impl Context {
    pub fn load(config_path: Option<&Path>, json: bool) -> anyhow::Result<Self> {
        Ok(Self {
            config: Config::load(config_path)?,
            json,
        })
    }

    /// Catalog from the configured fixtures; unreadable fixtures load empty
    pub fn catalog(&self) -> Catalog {
        Catalog::load(&self.config.schema.catalog)
    }

    pub fn store(&self) -> anyhow::Result<FileStore> {
        Ok(FileStore::open_configured(
            self.config.schema.cart.store_path.as_deref(),
        )?)
    }
}
