//! Static site build

use super::Context;
use crate::output::{format_count, print_json, Status};
use anyhow::Result;
use festival_site::SiteGenerator;
use festival_telemetry::{metrics, timed_span};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

pub fn run(ctx: &Context, out: Option<PathBuf>, progress: bool) -> Result<()> {
    timed_span!("build_site");

    let site = &ctx.config.schema.site;
    let out_dir = out.unwrap_or_else(|| PathBuf::from(&site.out_dir));
    let generator = SiteGenerator::new(site)?;
    let catalog = ctx.catalog();

    // pages plus index, sitemap and robots.txt
    let total = catalog.len() as u64 + 3;
    let pb = if progress && !ctx.json {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = generator.generate_with_progress(&catalog, &out_dir, |path| {
        pb.set_message(path.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    metrics().increment_by("site.pages", report.pages() as u64);

    if ctx.json {
        return print_json(&report);
    }

    Status::success(&format!(
        "Generated {} and {} in {}",
        format_count(report.projects, "project page", "project pages"),
        format_count(report.shop_items, "shop page", "shop pages"),
        report.out_dir.display()
    ));
    Ok(())
}
