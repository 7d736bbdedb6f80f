//! Catalog loading from the static JSON fixtures
//!
//! The site ships two fixtures: project cards and shop items. They are read
//! once at startup. [`Catalog::load`] never fails: a missing or malformed
//! fixture is logged and replaced by an empty list, so search and page
//! generation keep working against whatever did load.

use crate::config::CatalogConfig;
use crate::error::{Error, Result, ResultExt};
use crate::model::{CatalogRecord, Project, RecordId, RecordKind, ShopItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// In-memory catalog, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub shop_items: Vec<ShopItem>,
}

/// Fixtures are either a bare array or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Fixture<T> {
    List(Vec<T>),
    Wrapped {
        #[serde(alias = "projects", alias = "items", alias = "shop", alias = "products")]
        records: Vec<T>,
    },
}

impl<T> Fixture<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Fixture::List(records) | Fixture::Wrapped { records } => records,
        }
    }
}

impl Catalog {
    pub fn new(projects: Vec<Project>, shop_items: Vec<ShopItem>) -> Self {
        Self {
            projects,
            shop_items,
        }
    }

    /// Load both fixtures, substituting an empty list for any that fails.
    pub fn load(config: &CatalogConfig) -> Self {
        let projects = read_or_empty::<Project>(&config.projects);
        let shop_items = read_or_empty::<ShopItem>(&config.shop);

        tracing::info!(
            projects = projects.len(),
            shop_items = shop_items.len(),
            "Catalog loaded"
        );

        Self::new(projects, shop_items)
    }

    /// Load both fixtures, failing on the first unreadable one.
    pub fn try_load(config: &CatalogConfig) -> Result<Self> {
        let projects = read_fixture(&config.projects).context("loading project cards")?;
        let shop_items = read_fixture(&config.shop).context("loading shop items")?;
        Ok(Self::new(projects, shop_items))
    }

    /// Parse a catalog from in-memory JSON documents
    pub fn from_json(projects_json: &str, shop_json: &str) -> Result<Self> {
        let projects = serde_json::from_str::<Fixture<Project>>(projects_json)?.into_vec();
        let shop_items = serde_json::from_str::<Fixture<ShopItem>>(shop_json)?.into_vec();
        Ok(Self::new(projects, shop_items))
    }

    /// Combined candidate pool: projects first, then shop items.
    pub fn records(&self) -> impl Iterator<Item = CatalogRecord<'_>> + '_ {
        self.projects
            .iter()
            .map(CatalogRecord::Project)
            .chain(self.shop_items.iter().map(CatalogRecord::ShopItem))
    }

    /// Look up a record for routing a search result
    pub fn find(&self, kind: RecordKind, id: &RecordId) -> Option<CatalogRecord<'_>> {
        match kind {
            RecordKind::Project => self
                .projects
                .iter()
                .find(|p| &p.id == id)
                .map(CatalogRecord::Project),
            RecordKind::ShopItem => self
                .shop_items
                .iter()
                .find(|s| &s.id == id)
                .map(CatalogRecord::ShopItem),
        }
    }

    /// Shop item by id, as required by the cart
    pub fn shop_item(&self, id: &RecordId) -> Result<&ShopItem> {
        self.shop_items
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| Error::record_not_found(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.shop_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str::<Fixture<T>>(&content)
        .map(Fixture::into_vec)
        .map_err(|e| Error::catalog(path, e.to_string()).with_source(e))
}

fn read_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match read_fixture(path) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                code = %err.code,
                error = %err.message,
                "Catalog fixture unavailable, using empty list"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use crate::model::Searchable;
    use std::fs;

    const PROJECTS: &str = r#"[
        {"id": 1, "title": "Monkey Hut Shade Palace", "description": "A hexagonal shade structure", "category": "shade"},
        {"id": 2, "title": "Solar Lantern", "description": "Bottle light", "category": "lighting"}
    ]"#;

    const SHOP: &str = r#"{"items": [
        {"id": "goggles", "name": "Dust Goggles", "description": "Sealed lenses", "price": 18.0}
    ]}"#;

    fn write_fixtures(dir: &Path) -> CatalogConfig {
        fs::write(dir.join("projects.json"), PROJECTS).unwrap();
        fs::write(dir.join("shop.json"), SHOP).unwrap();
        CatalogConfig {
            projects: dir.join("projects.json"),
            shop: dir.join("shop.json"),
        }
    }

    #[test]
    fn test_load_both_fixture_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_fixtures(dir.path());

        let catalog = Catalog::try_load(&config).unwrap();
        assert_eq!(catalog.projects.len(), 2);
        assert_eq!(catalog.shop_items.len(), 1);
        assert_eq!(catalog.shop_items[0].title, "Dust Goggles");
    }

    #[test]
    fn test_records_pool_order() {
        let catalog = Catalog::from_json(PROJECTS, SHOP).unwrap();
        let kinds: Vec<RecordKind> = catalog.records().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![RecordKind::Project, RecordKind::Project, RecordKind::ShopItem]
        );
    }

    #[test]
    fn test_missing_fixture_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();
        let config = CatalogConfig {
            projects: dir.path().join("projects.json"),
            shop: dir.path().join("missing.json"),
        };

        let catalog = Catalog::load(&config);
        assert_eq!(catalog.projects.len(), 2);
        assert!(catalog.shop_items.is_empty());

        let err = Catalog::try_load(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_malformed_fixture_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("projects.json"), "{not json").unwrap();
        fs::write(dir.path().join("shop.json"), SHOP).unwrap();
        let config = CatalogConfig {
            projects: dir.path().join("projects.json"),
            shop: dir.path().join("shop.json"),
        };

        let catalog = Catalog::load(&config);
        assert!(catalog.projects.is_empty());
        assert_eq!(catalog.shop_items.len(), 1);

        let err = Catalog::try_load(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_find_routes_by_kind() {
        let catalog = Catalog::from_json(PROJECTS, SHOP).unwrap();

        let hut = catalog.find(RecordKind::Project, &RecordId::Number(1)).unwrap();
        assert_eq!(hut.title(), "Monkey Hut Shade Palace");
        assert!(catalog.find(RecordKind::ShopItem, &RecordId::Number(1)).is_none());
        assert!(catalog.shop_item(&"goggles".into()).is_ok());
        assert_eq!(
            catalog.shop_item(&"tent".into()).unwrap_err().code,
            ErrorCode::RecordNotFound
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.records().count(), 0);
    }
}
