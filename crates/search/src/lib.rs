//! As-you-type search for the festival catalog.
//!
//! This crate provides:
//! - Weighted field relevance scoring (title, description, category)
//! - Ranked, capped search over projects and shop items together
//! - Literal, pattern-free match highlighting
//!
//! # Example
//!
//! ```
//! use festival_core::{Catalog, Searchable};
//! use festival_search::SearchEngine;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id": 1, "title": "Monkey Hut Shade Palace",
//!          "description": "A shade structure", "category": "shade"}]"#,
//!     "[]",
//! ).unwrap();
//!
//! let engine = SearchEngine::with_defaults(&catalog);
//! let results = engine.search("shade");
//! assert_eq!(results[0].score, 23);
//! assert_eq!(results[0].item.title(), "Monkey Hut Shade Palace");
//! ```

mod engine;
mod error;
pub mod highlight;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{normalize_query, search_records, SearchEngine};
pub use error::{Result, SearchError};
pub use highlight::{highlight, highlight_html, match_ranges, Segment};
pub use relevance::{fold_case, MatchField, ScoreBreakdown, Scorer};

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
