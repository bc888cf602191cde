//! Catalog items as supplied by the persistence layer.

use crate::features::{FeatureRecord, DEFAULT_CATEGORY, DEFAULT_POPULARITY};
use crate::lenient;
use giftrec_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use uuid::Uuid;

/// Opaque catalog item identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Integer(u64),
    Uuid(Uuid),
    String(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Integer(i) => write!(f, "{}", i),
            ItemId::Uuid(u) => write!(f, "{}", u),
            ItemId::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(i: u64) -> Self {
        ItemId::Integer(i)
    }
}

impl From<Uuid> for ItemId {
    fn from(u: Uuid) -> Self {
        ItemId::Uuid(u)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::String(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::String(s.to_string())
    }
}

/// Optional item attributes.
///
/// Absent categorical attributes encode as `"Any"`; an absent or unparsable
/// popularity encodes as 50. Tags are carried for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GiftAttributes {
    #[serde(default, deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub target_age: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_number", skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f32>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl GiftAttributes {
    #[must_use]
    pub fn with_target_age(mut self, target_age: impl Into<String>) -> Self {
        self.target_age = Some(target_age.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, popularity: f32) -> Self {
        self.popularity = Some(popularity);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A recommendable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f32,
    pub category: String,
    #[serde(default)]
    pub attributes: Option<GiftAttributes>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: f32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            attributes: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: GiftAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Flatten into a feature record, substituting defaults for anything missing
    pub fn record(&self) -> FeatureRecord {
        let attrs = self.attributes.as_ref();
        let category_or_default = |value: Option<&String>| {
            value.cloned().unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
        };

        FeatureRecord {
            price: self.price,
            popularity: attrs
                .and_then(|a| a.popularity)
                .filter(|p| p.is_finite())
                .unwrap_or(DEFAULT_POPULARITY),
            category: self.category.clone(),
            target_age: category_or_default(attrs.and_then(|a| a.target_age.as_ref())),
            style: category_or_default(attrs.and_then(|a| a.style.as_ref())),
            occasion: category_or_default(attrs.and_then(|a| a.occasion.as_ref())),
        }
    }
}

/// Load a catalog from a JSON array of items
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let raw = std::fs::read_to_string(path)?;
    let items = serde_json::from_str(&raw)?;
    Ok(items)
}

/// The built-in seed catalog
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1u64, "Smart Watch Pro", 199.99, "Technology")
            .with_description("Advanced fitness tracking and notifications")
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age("Adult")
                    .with_style("Modern")
                    .with_occasion("Any")
                    .with_tags(["tech", "fitness", "gadgets"])
                    .with_popularity(85.0),
            ),
        CatalogItem::new(2u64, "Premium Leather Wallet", 49.99, "Accessories")
            .with_description("Handcrafted genuine leather wallet with RFID protection")
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age("Adult")
                    .with_style("Classic")
                    .with_occasion("Any")
                    .with_tags(["fashion", "accessories"])
                    .with_popularity(75.0),
            ),
        CatalogItem::new(3u64, "Gourmet Cookbook Collection", 79.99, "Books")
            .with_description("Set of international cuisine cookbooks")
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age("Adult")
                    .with_style("Traditional")
                    .with_occasion("Any")
                    .with_tags(["cooking", "books", "culinary"])
                    .with_popularity(70.0),
            ),
        CatalogItem::new(4u64, "Professional Art Set", 129.99, "Arts & Crafts")
            .with_description("Complete art supplies kit with premium materials")
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age("Any")
                    .with_style("Creative")
                    .with_occasion("Any")
                    .with_tags(["art", "creative", "supplies"])
                    .with_popularity(80.0),
            ),
        CatalogItem::new(5u64, "Wireless Earbuds", 159.99, "Technology")
            .with_description("High-quality wireless earbuds with noise cancellation")
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age("Any")
                    .with_style("Modern")
                    .with_occasion("Any")
                    .with_tags(["tech", "music", "audio"])
                    .with_popularity(90.0),
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_record_defaults_without_attributes() {
        let item = CatalogItem::new(7u64, "Mug", 12.0, "Kitchen");
        let record = item.record();

        assert_eq!(record.price, 12.0);
        assert_eq!(record.popularity, DEFAULT_POPULARITY);
        assert_eq!(record.category, "Kitchen");
        assert_eq!(record.target_age, "Any");
        assert_eq!(record.style, "Any");
        assert_eq!(record.occasion, "Any");
    }

    #[test]
    fn test_partial_attributes() {
        let item = CatalogItem::new(7u64, "Mug", 12.0, "Kitchen")
            .with_attributes(GiftAttributes::default().with_style("Rustic"));
        let record = item.record();

        assert_eq!(record.style, "Rustic");
        assert_eq!(record.target_age, "Any");
        assert_eq!(record.popularity, DEFAULT_POPULARITY);
    }

    #[test]
    fn test_unparsable_popularity_falls_back() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": 9,
            "name": "Kite",
            "price": 30.0,
            "category": "Outdoors",
            "attributes": {"popularity": "very", "style": "Fun"}
        }))
        .unwrap();

        assert_eq!(item.attributes.as_ref().unwrap().popularity, None);
        assert_eq!(item.record().popularity, DEFAULT_POPULARITY);
        assert_eq!(item.record().style, "Fun");
    }

    #[test]
    fn test_non_finite_popularity_falls_back() {
        for popularity in [f32::NAN, f32::INFINITY] {
            let item = CatalogItem::new(7u64, "Mug", 12.0, "Kitchen")
                .with_attributes(GiftAttributes::default().with_popularity(popularity));
            assert_eq!(item.record().popularity, DEFAULT_POPULARITY);
        }
    }

    #[test]
    fn test_oversized_price_reads_as_infinite() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": 2, "name": "Yacht", "price": 1e39, "category": "Outdoors"
        }))
        .unwrap();
        assert!(!item.record().price.is_finite());
    }

    #[test]
    fn test_numeric_string_popularity() {
        let attrs: GiftAttributes = serde_json::from_value(json!({"popularity": "64"})).unwrap();
        assert_eq!(attrs.popularity, Some(64.0));
    }

    #[test]
    fn test_item_id_forms() {
        let ids: Vec<ItemId> = serde_json::from_value(json!([
            3,
            "sku-3",
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        ]))
        .unwrap();

        assert_eq!(ids[0], ItemId::Integer(3));
        assert_eq!(ids[1], ItemId::String("sku-3".to_string()));
        assert!(matches!(ids[2], ItemId::Uuid(_)));
        assert_eq!(ids[2].to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[4].name, "Wireless Earbuds");
        assert_eq!(catalog[4].record().popularity, 90.0);
        assert!(catalog[0].attributes.as_ref().unwrap().tags.contains("fitness"));
    }

    #[test]
    fn test_load_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_catalog()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_catalog(file.path()).unwrap();
        assert_eq!(loaded, sample_catalog());
    }

    #[test]
    fn test_load_catalog_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(giftrec_core::Error::Serialization(_))
        ));
    }
}
