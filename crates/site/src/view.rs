//! Record to page view-model mapping.
//!
//! Everything a template needs is computed here so templates stay free of
//! logic and the mapping can be tested without rendering.

use festival_core::config::SiteConfig;
use festival_core::{CatalogRecord, RecordKind, Searchable};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Search engines show roughly this many characters of a description
pub const META_DESCRIPTION_LIMIT: usize = 155;

/// One labelled fact shown on a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// Site-wide values shared by every page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteContext {
    pub site_name: String,
    pub description: String,
    /// Origin without a trailing slash
    pub base_url: String,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site_name: config.site_name.clone(),
            description: config.description.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a site-relative path
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Everything the page template renders for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageViewModel {
    pub kind: RecordKind,
    pub kind_label: &'static str,
    /// Catalog stage that lists this kind of record
    pub kind_path: &'static str,
    pub is_product: bool,
    pub id: String,
    pub slug: String,
    /// Output path relative to the site root
    pub path: String,
    pub url: String,
    pub title: String,
    pub page_title: String,
    pub description: String,
    pub meta_description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub details: Vec<Detail>,
    /// Filled in by the generator once structured data is built
    pub json_ld: String,
}

impl PageViewModel {
    pub fn from_record(record: CatalogRecord<'_>, slug: String, site: &SiteContext) -> Self {
        let path = format!("{}/{}.html", record.kind().path_segment(), slug);
        let description = record.description().trim().to_string();
        let meta_source = if description.is_empty() {
            site.description.as_str()
        } else {
            description.as_str()
        };

        Self {
            kind: record.kind(),
            kind_label: match record.kind() {
                RecordKind::Project => "Project",
                RecordKind::ShopItem => "Shop",
            },
            kind_path: record.kind().path_segment(),
            is_product: record.kind() == RecordKind::ShopItem,
            id: record.id().to_string(),
            url: site.absolute(&path),
            path,
            slug,
            title: record.title().to_string(),
            page_title: format!("{} | {}", record.title(), site.site_name),
            meta_description: truncate_graphemes(meta_source, META_DESCRIPTION_LIMIT),
            description,
            category: record.category().map(str::to_string),
            image: record.image().map(|img| site.absolute(img)),
            details: details(record),
            json_ld: String::new(),
        }
    }
}

fn details(record: CatalogRecord<'_>) -> Vec<Detail> {
    let mut details = Vec::new();

    if let Some(project) = record.as_project() {
        if let Some(difficulty) = &project.difficulty {
            details.push(Detail {
                label: "Difficulty",
                value: difficulty.clone(),
            });
        }
        if let Some(time) = &project.time_estimate {
            details.push(Detail {
                label: "Time",
                value: time.clone(),
            });
        }
        if !project.materials.is_empty() {
            details.push(Detail {
                label: "Materials",
                value: project.materials.join(", "),
            });
        }
    }

    if let Some(item) = record.as_shop_item() {
        details.push(Detail {
            label: "Price",
            value: format_price(item.price_cents()),
        });
        details.push(Detail {
            label: "Availability",
            value: if item.in_stock { "In stock" } else { "Sold out" }.to_string(),
        });
    }

    details
}

/// `1850` -> `18.50`
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// `1850` -> `$18.50`
pub fn format_price(cents: u64) -> String {
    format!("${}", format_amount(cents))
}

/// Cut `text` to at most `limit` user-perceived characters, adding an
/// ellipsis when anything was dropped. Prefers to break at whitespace.
pub fn truncate_graphemes(text: &str, limit: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let graphemes: Vec<&str> = collapsed.graphemes(true).collect();
    if graphemes.len() <= limit {
        return collapsed;
    }

    let keep = limit.saturating_sub(1);
    let mut cut = graphemes[..keep].concat();
    if let Some(space) = cut.rfind(' ') {
        if space > keep / 2 {
            cut.truncate(space);
        }
    }
    format!("{}…", cut.trim_end())
}
