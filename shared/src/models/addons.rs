//! Add-on (concession) catalog

use crate::types::{AddonCategoryId, AddonId};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Add-on category ("Snacks", "Drinks", "Combo Deals")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonCategory {
    pub name: String,
}

/// One purchasable concession item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddonItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Category this item is grouped under
    pub category: AddonCategoryId,
    /// Displayed "Save $X" amount for combo deals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
    /// Highlighted in the add-ons grid
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    /// Image path for the grid tile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AddonItem {
    /// Unit price lifted to Decimal for calculation
    pub fn unit_price(&self) -> Decimal {
        Decimal::from_f64(self.price).unwrap_or_default()
    }
}

/// Add-on catalog - categories plus the items grouped under them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonCatalog {
    pub categories: HashMap<AddonCategoryId, AddonCategory>,
    pub items: HashMap<AddonId, AddonItem>,
}

impl AddonCatalog {
    pub fn item(&self, id: &AddonId) -> Option<&AddonItem> {
        self.items.get(id)
    }

    /// Items in a category, sorted by id for stable display order
    pub fn items_in_category(&self, category: &AddonCategoryId) -> Vec<(&AddonId, &AddonItem)> {
        let mut items: Vec<_> = self
            .items
            .iter()
            .filter(|(_, item)| &item.category == category)
            .collect();
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_addon_catalog_json() {
        let json = r#"{
            "categories": {
                "snacks": {"name": "Snacks"},
                "combos": {"name": "Combo Deals"}
            },
            "items": {
                "popcorn-large": {
                    "name": "Large Popcorn",
                    "description": "Freshly popped",
                    "price": 8.5,
                    "category": "snacks"
                },
                "movie-combo": {
                    "name": "Movie Night Combo",
                    "price": 15.0,
                    "category": "combos",
                    "savings": 3.5,
                    "featured": true
                }
            }
        }"#;
        let catalog: AddonCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.items.len(), 2);

        let combo = catalog.item(&AddonId::from("movie-combo")).unwrap();
        assert!(combo.featured);
        assert_eq!(combo.savings, Some(3.5));

        let snacks = catalog.items_in_category(&AddonCategoryId::from("snacks"));
        assert_eq!(snacks.len(), 1);
        assert_eq!(snacks[0].1.name, "Large Popcorn");
    }
}
