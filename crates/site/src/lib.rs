//! Build-time static pages for the festival catalog.
//!
//! Reads the same catalog the client browses and emits, per record, a
//! crawlable HTML page with Open Graph tags and schema.org JSON-LD, plus an
//! index page, `sitemap.xml` and `robots.txt`.
//!
//! # Example
//!
//! ```rust,no_run
//! use festival_core::{config::SiteConfig, Catalog};
//! use festival_site::SiteGenerator;
//! use std::path::Path;
//!
//! let catalog = Catalog::from_json("[]", "[]").unwrap();
//! let report = SiteGenerator::new(&SiteConfig::default())
//!     .unwrap()
//!     .generate(&catalog, Path::new("dist"))
//!     .unwrap();
//! println!("wrote {} files", report.files.len());
//! ```

mod error;
mod generator;
pub mod sitemap;
pub mod slug;
pub mod structured_data;
mod templates;
pub mod view;

pub use error::{Result, SiteError};
pub use generator::{RenderedFile, SiteGenerator, SiteReport};
pub use view::{PageViewModel, SiteContext};
