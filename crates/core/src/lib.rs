//! Core types for the festival catalog toolkit
//!
//! This crate provides the pieces shared by search, navigation, the static
//! page generator and the CLI:
//!
//! - **Model**: project cards, shop items and the [`Searchable`] view over them
//! - **Catalog**: tolerant loading of the JSON fixtures
//! - **Configuration**: `festival.toml` with per-section defaults
//! - **Error handling**: coded errors with context and recovery suggestions
//!
//! # Example
//!
//! ```rust,no_run
//! use festival_core::{catalog::Catalog, config::Config};
//!
//! let config = Config::load(None).expect("invalid festival.toml");
//! let catalog = Catalog::load(&config.schema.catalog);
//! println!("{} records", catalog.len());
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, ErrorCategory, ErrorCode, Result, ResultExt};
pub use model::{CatalogRecord, Project, RecordId, RecordKind, Searchable, ShopItem};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{Error, ErrorCategory, ErrorCode, Result, ResultExt};
    pub use crate::model::{CatalogRecord, Project, RecordId, RecordKind, Searchable, ShopItem};
}
