//! Configuration loading and schema definitions
//!
//! One `festival.toml` drives the CLI, the search engine, the navigator and
//! the static site generator.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
