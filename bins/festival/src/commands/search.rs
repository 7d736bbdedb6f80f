//! Catalog search

use super::Context;
use crate::output::{format_count, highlighted, print_json, Status};
use anyhow::Result;
use festival_core::Searchable;
use festival_search::{SearchEngine, SearchError};
use festival_telemetry::metrics;
use owo_colors::OwoColorize;

pub fn run(ctx: &Context, query: &str, limit: Option<u64>) -> Result<()> {
    let catalog = ctx.catalog();
    let mut config = ctx.config.schema.search.clone();
    if let Some(limit) = limit {
        config.max_results = usize::try_from(limit).unwrap_or(usize::MAX);
    }

    let engine = SearchEngine::new(&catalog, config);
    let results = match engine.try_search(query) {
        Ok(results) => results,
        Err(SearchError::QueryTooShort { min, .. }) => {
            if ctx.json {
                println!("[]");
            } else {
                Status::warning(&format!("Type at least {} characters to search", min));
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    metrics().increment("search.queries");
    metrics().increment_by("search.results", results.len() as u64);

    if ctx.json {
        return print_json(&results);
    }

    let query = query.trim();
    if results.is_empty() {
        Status::info(&format!("No matches for \"{}\"", query));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\"",
        format_count(results.len(), "result", "results"),
        query
    ));
    for result in &results {
        let record = result.item;
        println!(
            "{}  {}  {}",
            format!("{:>3}", result.score).cyan(),
            format!("{:<8}", record.kind().path_segment()).dimmed(),
            highlighted(record.title(), query)
        );
        if !record.description().is_empty() {
            println!("               {}", highlighted(record.description(), query));
        }
    }
    Ok(())
}
