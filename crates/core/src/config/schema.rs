//! Configuration schema definitions
//!
//! Every section and key is optional; missing values fall back to the
//! defaults the festival site ships with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub navigator: NavigatorConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub cart: CartConfig,

    #[serde(default)]
    pub telemetry: LoggingConfig,
}

/// Location of the JSON fixtures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Project cards fixture
    #[serde(default = "default_projects_path")]
    pub projects: PathBuf,

    /// Shop items fixture
    #[serde(default = "default_shop_path")]
    pub shop: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            projects: default_projects_path(),
            shop: default_shop_path(),
        }
    }
}

fn default_projects_path() -> PathBuf {
    PathBuf::from("data/projects.json")
}

fn default_shop_path() -> PathBuf {
    PathBuf::from("data/shop.json")
}

/// Per-field weights added when the query is found in that field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldWeights {
    #[serde(default = "default_title_weight")]
    pub title: u32,
    #[serde(default = "default_description_weight")]
    pub description: u32,
    #[serde(default = "default_category_weight")]
    pub category: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            description: default_description_weight(),
            category: default_category_weight(),
        }
    }
}

fn default_title_weight() -> u32 {
    10
}

fn default_description_weight() -> u32 {
    5
}

fn default_category_weight() -> u32 {
    8
}

/// As-you-type search settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this (in characters) return nothing
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Cap on combined results across projects and shop items
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default)]
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
            weights: FieldWeights::default(),
        }
    }
}

fn default_min_query_len() -> usize {
    2
}

fn default_max_results() -> usize {
    10
}

/// Stage navigation and swipe gesture tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigatorConfig {
    /// Ordered stage names
    #[serde(default = "default_stages")]
    pub stages: Vec<String>,

    /// Duration of a committed transition in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: f64,

    /// Horizontal travel that commits a swipe regardless of speed
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold_px: f64,

    /// Release speed (px/ms) that commits a swipe regardless of distance
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,

    /// Offset multiplier when dragging past the first or last stage
    #[serde(default = "default_boundary_damping")]
    pub boundary_damping: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            transition_ms: default_transition_ms(),
            distance_threshold_px: default_distance_threshold(),
            velocity_threshold: default_velocity_threshold(),
            boundary_damping: default_boundary_damping(),
        }
    }
}

fn default_stages() -> Vec<String> {
    ["home", "projects", "shop", "guides", "about"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_transition_ms() -> f64 {
    600.0
}

fn default_distance_threshold() -> f64 {
    50.0
}

fn default_velocity_threshold() -> f64 {
    0.3
}

fn default_boundary_damping() -> f64 {
    0.3
}

/// Static SEO page generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs and the sitemap
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_site_description")]
    pub description: String,

    /// Output directory for generated pages
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            description: default_site_description(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_base_url() -> String {
    "https://playaworkshop.org".to_string()
}

fn default_site_name() -> String {
    "Playa Workshop".to_string()
}

fn default_site_description() -> String {
    "DIY shade structures, camp builds and gear for the festival season".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Cart persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartConfig {
    /// JSON file backing the cart; the platform data dir is used when unset
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
