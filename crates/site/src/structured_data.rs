//! schema.org JSON-LD for generated pages.

use crate::view::{format_amount, PageViewModel, SiteContext};
use festival_core::CatalogRecord;
use serde_json::{json, Value};

/// `HowTo` for projects, `Product` with an `Offer` for shop items.
pub fn json_ld(record: CatalogRecord<'_>, page: &PageViewModel, site: &SiteContext) -> Value {
    let mut data = match record {
        CatalogRecord::Project(project) => {
            let mut data = json!({
                "@context": "https://schema.org",
                "@type": "HowTo",
                "name": page.title,
                "description": page.meta_description,
                "url": page.url,
            });
            if !project.materials.is_empty() {
                data["supply"] = project
                    .materials
                    .iter()
                    .map(|m| json!({"@type": "HowToSupply", "name": m}))
                    .collect();
            }
            data
        }
        CatalogRecord::ShopItem(item) => json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": page.title,
            "description": page.meta_description,
            "url": page.url,
            "sku": page.id,
            "offers": {
                "@type": "Offer",
                "priceCurrency": "USD",
                "price": format_amount(item.price_cents()),
                "availability": if item.in_stock {
                    "https://schema.org/InStock"
                } else {
                    "https://schema.org/OutOfStock"
                },
                "url": page.url,
            },
        }),
    };

    if let Some(image) = &page.image {
        data["image"] = json!(image);
    }
    if let Some(category) = &page.category {
        data["keywords"] = json!(category);
    }
    data["publisher"] = json!({"@type": "Organization", "name": site.site_name});

    data
}

/// Serialize for embedding in a `<script>` element.
///
/// `</` is escaped so a description cannot close the script early.
pub fn to_script_json(value: &Value) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use festival_core::config::SiteConfig;
    use festival_core::{Project, RecordId, ShopItem};

    fn site() -> SiteContext {
        SiteContext::from_config(&SiteConfig::default())
    }

    #[test]
    fn test_project_is_howto() {
        let project = Project {
            id: RecordId::Number(1),
            title: "Monkey Hut".to_string(),
            description: "Shade".to_string(),
            category: Some("shade".to_string()),
            difficulty: None,
            time_estimate: None,
            materials: vec!["EMT conduit".to_string()],
            image: None,
        };
        let record = CatalogRecord::Project(&project);
        let page = PageViewModel::from_record(record, "monkey-hut".into(), &site());

        let data = json_ld(record, &page, &site());
        assert_eq!(data["@type"], "HowTo");
        assert_eq!(data["supply"][0]["name"], "EMT conduit");
        assert_eq!(data["keywords"], "shade");
        assert!(data.get("image").is_none());
    }

    #[test]
    fn test_shop_item_is_product_with_offer() {
        let item = ShopItem {
            id: RecordId::Text("goggles".to_string()),
            title: "Dust Goggles".to_string(),
            description: "Sealed".to_string(),
            price: 18.0,
            category: None,
            image: Some("img/g.png".to_string()),
            in_stock: true,
        };
        let record = CatalogRecord::ShopItem(&item);
        let page = PageViewModel::from_record(record, "dust-goggles".into(), &site());

        let data = json_ld(record, &page, &site());
        assert_eq!(data["@type"], "Product");
        assert_eq!(data["sku"], "goggles");
        assert_eq!(data["offers"]["price"], "18.00");
        assert_eq!(data["offers"]["availability"], "https://schema.org/InStock");
        assert_eq!(data["image"], "https://playaworkshop.org/img/g.png");
    }

    #[test]
    fn test_script_json_cannot_close_tag() {
        let value = json!({"description": "</script><script>alert(1)</script>"});
        let embedded = to_script_json(&value).unwrap();
        assert!(!embedded.contains("</script>"));

        // Still valid JSON with the same content
        let parsed: Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(parsed, value);
    }
}
