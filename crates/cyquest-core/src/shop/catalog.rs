//! The demo shop catalog.

use once_cell::sync::Lazy;

use crate::shop::model::{BoosterSpec, ItemCategory, ShopItem};

/// Id of the free default cursor, owned and equipped from first load.
pub const DEFAULT_CURSOR_ID: &str = "cursor-default";

/// Id of the free default theme, owned and equipped from first load.
pub const DEFAULT_THEME_ID: &str = "theme-default";

/// An immutable collection of shop items keyed by id.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<ShopItem>,
}

impl ItemCatalog {
    /// Creates a catalog from a list of items.
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    /// Looks an item up by id.
    pub fn get(&self, id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, in display order.
    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    /// Items of one category, in display order.
    pub fn by_category(&self, category: ItemCategory) -> Vec<&ShopItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Ids of the free default items.
    pub fn default_item_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.is_default())
            .map(|item| item.id.as_str())
            .collect()
    }
}

static DEMO_CATALOG: Lazy<ItemCatalog> = Lazy::new(|| {
    ItemCatalog::new(vec![
        ShopItem {
            id: DEFAULT_CURSOR_ID.to_string(),
            name: "Standard Cursor".to_string(),
            description: "The trusty default pointer.".to_string(),
            category: ItemCategory::Cursor,
            price: 0,
            booster: None,
        },
        ShopItem {
            id: "cursor-cyber".to_string(),
            name: "Cyber Cursor".to_string(),
            description: "A glowing circuit-board pointer for true hackers.".to_string(),
            category: ItemCategory::Cursor,
            price: 250,
            booster: None,
        },
        ShopItem {
            id: "cursor-neon".to_string(),
            name: "Neon Pointer".to_string(),
            description: "Leaves a neon trail across your dashboard.".to_string(),
            category: ItemCategory::Cursor,
            price: 400,
            booster: None,
        },
        ShopItem {
            id: DEFAULT_THEME_ID.to_string(),
            name: "Classic Theme".to_string(),
            description: "Clean and familiar.".to_string(),
            category: ItemCategory::Theme,
            price: 0,
            booster: None,
        },
        ShopItem {
            id: "theme-dark-ops".to_string(),
            name: "Dark Ops Theme".to_string(),
            description: "Low-light operations center styling.".to_string(),
            category: ItemCategory::Theme,
            price: 600,
            booster: None,
        },
        ShopItem {
            id: "theme-synthwave".to_string(),
            name: "Synthwave Theme".to_string(),
            description: "Retro gradients straight from the 80s grid.".to_string(),
            category: ItemCategory::Theme,
            price: 800,
            booster: None,
        },
        ShopItem {
            id: "booster-small".to_string(),
            name: "Small XP Booster".to_string(),
            description: "+25% XP for one hour.".to_string(),
            category: ItemCategory::Booster,
            price: 300,
            booster: Some(BoosterSpec {
                boost_percent: 25,
                duration_hours: 1,
            }),
        },
        ShopItem {
            id: "booster-large".to_string(),
            name: "Large XP Booster".to_string(),
            description: "+50% XP for four hours.".to_string(),
            category: ItemCategory::Booster,
            price: 750,
            booster: Some(BoosterSpec {
                boost_percent: 50,
                duration_hours: 4,
            }),
        },
        ShopItem {
            id: "booster-mega".to_string(),
            name: "Mega XP Booster".to_string(),
            // Demo copy inherited from the product catalog. The claim about
            // stacking does not match the single-slot activation behavior;
            // pending product clarification.
            description: "+100% XP for eight hours. Stacks with other boosters!".to_string(),
            category: ItemCategory::Booster,
            price: 1500,
            booster: Some(BoosterSpec {
                boost_percent: 100,
                duration_hours: 8,
            }),
        },
        ShopItem {
            id: "premium-hint-pack".to_string(),
            name: "Hint Pack".to_string(),
            description: "Unlock hints for the trickiest quiz questions.".to_string(),
            category: ItemCategory::Premium,
            price: 500,
            booster: None,
        },
        ShopItem {
            id: "premium-cert-frame".to_string(),
            name: "Certificate Frame".to_string(),
            description: "A gilded frame for your completion certificates.".to_string(),
            category: ItemCategory::Premium,
            price: 1200,
            booster: None,
        },
    ])
});

/// The built-in demo catalog.
pub fn demo_catalog() -> &'static ItemCatalog {
    &DEMO_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let catalog = demo_catalog();
        let mut ids: Vec<_> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.items().len());
    }

    #[test]
    fn test_exactly_one_free_default_per_cosmetic_category() {
        let catalog = demo_catalog();
        for category in [ItemCategory::Cursor, ItemCategory::Theme] {
            let defaults: Vec<_> = catalog
                .by_category(category)
                .into_iter()
                .filter(|item| item.is_default())
                .collect();
            assert_eq!(defaults.len(), 1, "one free default for {category}");
        }
        assert_eq!(
            catalog.default_item_ids(),
            vec![DEFAULT_CURSOR_ID, DEFAULT_THEME_ID]
        );
    }

    #[test]
    fn test_boosters_carry_specs() {
        let catalog = demo_catalog();
        for item in catalog.by_category(ItemCategory::Booster) {
            assert!(item.booster.is_some(), "{} must have a spec", item.id);
        }
        let small = catalog.get("booster-small").unwrap();
        let spec = small.booster.unwrap();
        assert_eq!(spec.boost_percent, 25);
        assert_eq!(spec.duration_hours, 1);
    }
}
