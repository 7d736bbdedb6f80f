//! Stage listing

use super::Context;
use crate::output::{print_json, Status};
use anyhow::Result;
use festival_navigator::StageSet;
use owo_colors::OwoColorize;

pub fn run(ctx: &Context) -> Result<()> {
    let navigator = &ctx.config.schema.navigator;
    let stages = StageSet::new(navigator.stages.iter().cloned())?;

    if ctx.json {
        let entries: Vec<_> = stages
            .iter()
            .enumerate()
            .map(|(index, name)| {
                serde_json::json!({
                    "index": index,
                    "name": name,
                    "fragment": format!("#{}", name),
                })
            })
            .collect();
        return print_json(&entries);
    }

    Status::header("Stages");
    for (index, name) in stages.iter().enumerate() {
        println!("  {}  {:<12} {}", index.to_string().cyan(), name, format!("#{}", name).dimmed());
    }
    println!();
    println!(
        "  Transition {} ms, commit past {} px or {} px/ms",
        navigator.transition_ms, navigator.distance_threshold_px, navigator.velocity_threshold
    );
    Ok(())
}
