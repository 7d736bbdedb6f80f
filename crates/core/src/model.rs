//! Catalog record types
//!
//! Records are deserialized once from the JSON fixtures and never mutated
//! afterwards. Search and page generation borrow them through
//! [`CatalogRecord`] and the [`Searchable`] trait.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque record identifier. Fixtures use either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Integers parse to [`RecordId::Number`], anything else is kept as text
impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(RecordId::Number)
            .unwrap_or_else(|_| RecordId::Text(s.to_string())))
    }
}

/// Record category tag. Determines routing, not scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Project,
    ShopItem,
}

impl RecordKind {
    /// URL path segment used for routing and generated pages
    pub fn path_segment(&self) -> &'static str {
        match self {
            RecordKind::Project => "projects",
            RecordKind::ShopItem => "shop",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Project => f.write_str("project"),
            RecordKind::ShopItem => f.write_str("shop item"),
        }
    }
}

/// A DIY build project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, alias = "timeEstimate")]
    pub time_estimate: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// An item sold in the camp shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: RecordId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price in dollars as written in the fixture
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_in_stock", alias = "inStock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl ShopItem {
    /// Price rounded to whole cents
    pub fn price_cents(&self) -> u64 {
        if self.price.is_finite() && self.price > 0.0 {
            (self.price * 100.0).round() as u64
        } else {
            0
        }
    }
}

/// Read-only view of anything the search engine can rank.
pub trait Searchable {
    fn id(&self) -> &RecordId;
    fn kind(&self) -> RecordKind;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// Absent for record kinds that carry no category tag.
    fn category(&self) -> Option<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn id(&self) -> &RecordId {
        (**self).id()
    }

    fn kind(&self) -> RecordKind {
        (**self).kind()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }
}

impl Searchable for Project {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Project
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Searchable for ShopItem {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::ShopItem
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Borrowed reference to one record of the combined catalog pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogRecord<'a> {
    Project(&'a Project),
    ShopItem(&'a ShopItem),
}

impl<'a> CatalogRecord<'a> {
    fn inner(&self) -> &'a dyn Searchable {
        match *self {
            CatalogRecord::Project(p) => p,
            CatalogRecord::ShopItem(s) => s,
        }
    }

    pub fn as_project(&self) -> Option<&'a Project> {
        match *self {
            CatalogRecord::Project(p) => Some(p),
            CatalogRecord::ShopItem(_) => None,
        }
    }

    pub fn as_shop_item(&self) -> Option<&'a ShopItem> {
        match *self {
            CatalogRecord::ShopItem(s) => Some(s),
            CatalogRecord::Project(_) => None,
        }
    }

    pub fn image(&self) -> Option<&'a str> {
        match *self {
            CatalogRecord::Project(p) => p.image.as_deref(),
            CatalogRecord::ShopItem(s) => s.image.as_deref(),
        }
    }
}

impl Searchable for CatalogRecord<'_> {
    fn id(&self) -> &RecordId {
        self.inner().id()
    }

    fn kind(&self) -> RecordKind {
        self.inner().kind()
    }

    fn title(&self) -> &str {
        self.inner().title()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn category(&self) -> Option<&str> {
        self.inner().category()
    }
}

impl Serialize for CatalogRecord<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CatalogRecord", 5)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("category", &self.category())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "monkey-hut"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Number(7));
        assert_eq!(ids[1], RecordId::Text("monkey-hut".to_string()));
        assert_eq!(ids[1].to_string(), "monkey-hut");
    }

    #[test]
    fn test_record_id_from_str() {
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId::Number(42));
        assert_eq!(
            "goggles".parse::<RecordId>().unwrap(),
            RecordId::Text("goggles".to_string())
        );
    }

    #[test]
    fn test_shop_item_name_alias_and_defaults() {
        let item: ShopItem =
            serde_json::from_str(r#"{"id": 1, "name": "Dust Goggles", "price": 14.5}"#).unwrap();
        assert_eq!(item.title, "Dust Goggles");
        assert_eq!(item.description, "");
        assert!(item.category.is_none());
        assert!(item.in_stock);
        assert_eq!(item.price_cents(), 1450);
    }

    #[test]
    fn test_negative_price_is_zero_cents() {
        let item: ShopItem =
            serde_json::from_str(r#"{"id": 1, "title": "Broken", "price": -3.0}"#).unwrap();
        assert_eq!(item.price_cents(), 0);
    }

    #[test]
    fn test_catalog_record_delegates() {
        let project: Project = serde_json::from_str(
            r#"{"id": "hut", "title": "Monkey Hut", "description": "Shade", "category": "shade"}"#,
        )
        .unwrap();
        let record = CatalogRecord::Project(&project);

        assert_eq!(record.kind(), RecordKind::Project);
        assert_eq!(record.title(), "Monkey Hut");
        assert_eq!(record.category(), Some("shade"));
        assert!(record.as_shop_item().is_none());

        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["kind"], "project");
    }
}
